use heroes_common::db::Database;
use heroes_entity::{hero, strength::Strength};
use heroes_module_fundamental::{
    hero::{model::NewHero, service::HeroService},
    hero_power::{model::NewHeroPower, service::HeroPowerService},
    power::{model::NewPower, service::PowerService},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use strum::VariantArray;

const HEROES: &[(&str, &str)] = &[
    ("Kamala Khan", "Ms. Marvel"),
    ("Doreen Green", "Squirrel Girl"),
    ("Gwen Stacy", "Spider-Gwen"),
    ("Janet Van Dyne", "The Wasp"),
    ("Wanda Maximoff", "Scarlet Witch"),
    ("Carol Danvers", "Captain Marvel"),
    ("Jean Grey", "Dark Phoenix"),
    ("Ororo Munroe", "Storm"),
    ("Kitty Pryde", "Shadowcat"),
    ("Elektra Natchios", "Elektra"),
];

const POWERS: &[(&str, &str)] = &[
    ("super strength", "gives the wielder super-human strengths"),
    (
        "flight",
        "gives the wielder the ability to fly through the skies at supersonic speed",
    ),
    (
        "super human senses",
        "allows the wielder to use her senses at a super-human level",
    ),
    ("elasticity", "can stretch the human body to extreme lengths"),
];

/// Seed heroes, powers and links between them.
///
/// Does nothing if there already are heroes.
pub async fn sample_data(db: Database) -> anyhow::Result<()> {
    let existing = hero::Entity::find().count(&db).await?;
    if existing > 0 {
        log::info!("Found {existing} heroes, skipping sample data");
        return Ok(());
    }

    let heroes = HeroService::new(db.clone());
    let powers = PowerService::new(db.clone());
    let links = HeroPowerService::new(db);

    let mut hero_ids = Vec::with_capacity(HEROES.len());
    for (name, super_name) in HEROES {
        let hero = heroes
            .create_hero(NewHero {
                name: name.to_string(),
                super_name: super_name.to_string(),
            })
            .await?;
        hero_ids.push(hero.id);
    }

    let mut power_ids = Vec::with_capacity(POWERS.len());
    for (name, description) in POWERS {
        let power = powers
            .create_power(NewPower {
                name: name.to_string(),
                description: description.to_string(),
            })
            .await?;
        power_ids.push(power.id);
    }

    let strengths = Strength::VARIANTS.iter().cycle();
    let assigned = power_ids.iter().cycle();

    for ((hero_id, power_id), strength) in hero_ids.iter().zip(assigned).zip(strengths) {
        links
            .create_hero_power(NewHeroPower {
                strength: Some(strength.to_string()),
                hero_id: Some(*hero_id),
                power_id: Some(*power_id),
            })
            .await?;
    }

    log::info!(
        "Loaded sample data: {} heroes, {} powers",
        hero_ids.len(),
        power_ids.len()
    );

    Ok(())
}
