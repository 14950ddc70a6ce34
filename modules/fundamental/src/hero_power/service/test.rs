use super::HeroPowerService;
use crate::hero::{
    model::{HeroSummary, NewHero},
    service::HeroService,
};
use crate::hero_power::model::NewHeroPower;
use crate::power::{
    model::{NewPower, PowerSummary},
    service::PowerService,
};
use crate::Error;
use heroes_entity::{hero_power, strength::Strength};
use heroes_test_context::HeroesContext;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_context::test_context;
use test_log::test;

async fn setup(ctx: &HeroesContext) -> Result<(HeroSummary, PowerSummary), anyhow::Error> {
    let hero = HeroService::new(ctx.db.clone())
        .create_hero(NewHero {
            name: "Gwen Stacy".into(),
            super_name: "Spider-Gwen".into(),
        })
        .await?;
    let power = PowerService::new(ctx.db.clone())
        .create_power(NewPower {
            name: "super strength".into(),
            description: "gives the wielder super-human strengths".into(),
        })
        .await?;
    Ok((hero, power))
}

async fn links(ctx: &HeroesContext) -> Result<u64, anyhow::Error> {
    Ok(hero_power::Entity::find().count(&ctx.db).await?)
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn create_and_fetch(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let service = HeroPowerService::new(ctx.db.clone());
    let (hero, power) = setup(ctx).await?;

    let created = service
        .create_hero_power(NewHeroPower {
            strength: Some("Average".into()),
            hero_id: Some(hero.id),
            power_id: Some(power.id),
        })
        .await?;

    assert_eq!(created.strength, Strength::Average);
    assert_eq!(created.hero_id, hero.id);
    assert_eq!(created.power_id, power.id);
    assert_eq!(created.hero, hero);
    assert_eq!(created.power, power);

    let fetched = service.fetch_hero_power(created.id).await?;
    assert_eq!(fetched, Some(created));

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn fetch_missing(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let service = HeroPowerService::new(ctx.db.clone());

    assert_eq!(service.fetch_hero_power(999999).await?, None);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn reject_invalid_strength(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let service = HeroPowerService::new(ctx.db.clone());
    let (hero, power) = setup(ctx).await?;

    for strength in ["Mighty", "average", ""] {
        let result = service
            .create_hero_power(NewHeroPower {
                strength: Some(strength.into()),
                hero_id: Some(hero.id),
                power_id: Some(power.id),
            })
            .await;
        assert!(matches!(result, Err(Error::Validation(_))), "{strength}");
    }

    assert_eq!(links(ctx).await?, 0);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn reject_missing_references(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let service = HeroPowerService::new(ctx.db.clone());
    let (hero, power) = setup(ctx).await?;

    for (hero_id, power_id) in [(None, Some(power.id)), (Some(hero.id), None), (None, None)] {
        let result = service
            .create_hero_power(NewHeroPower {
                strength: Some("Strong".into()),
                hero_id,
                power_id,
            })
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    assert_eq!(links(ctx).await?, 0);

    Ok(())
}

#[test_context(HeroesContext)]
#[test(actix_web::test)]
async fn reject_dangling_references(ctx: &HeroesContext) -> Result<(), anyhow::Error> {
    let service = HeroPowerService::new(ctx.db.clone());
    let (hero, power) = setup(ctx).await?;

    let result = service
        .create_hero_power(NewHeroPower {
            strength: Some("Strong".into()),
            hero_id: Some(hero.id + 1000),
            power_id: Some(power.id + 1000),
        })
        .await;

    match result {
        Err(Error::Validation(errors)) => assert_eq!(errors.len(), 2),
        other => panic!("unexpected result: {other:?}"),
    }

    assert_eq!(links(ctx).await?, 0);

    Ok(())
}
