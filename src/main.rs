use anyhow::Context;
use chrono::NaiveDate;
use tracing::{error, info, Instrument};

use filmorate::app_system::{setup_tracing, FilmorateSystem};
use filmorate::config::Config;
use filmorate::domain::{FilmCreate, UserCreate};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    setup_tracing(&config.log_filter);

    info!("Starting filmorate");

    let system = FilmorateSystem::new(&config);

    let span = tracing::info_span!("user_creation");
    let (alice, bob) = async {
        info!("Creating users");
        let alice = system.users.create_user(UserCreate::new("alice", "alice@example.com")).await?;
        let bob = system
            .users
            .create_user(UserCreate::new("bob", "bob@example.com").with_name("Bob"))
            .await?;
        Ok::<_, filmorate::error::FilmorateError>((alice, bob))
    }
    .instrument(span)
    .await?;

    info!(alice = alice.id, bob = bob.id, "Users created successfully");

    let first_screening = NaiveDate::from_ymd_opt(1895, 12, 28).context("invalid date")?;
    let arrival = system
        .films
        .create_film(
            FilmCreate::new("L'Arrivée d'un train", first_screening)
                .with_description("A train pulls into La Ciotat station")
                .with_duration(1),
        )
        .await?;
    let sequel = system
        .films
        .create_film(FilmCreate::new(
            "Le Voyage dans la Lune",
            NaiveDate::from_ymd_opt(1902, 9, 1).context("invalid date")?,
        ))
        .await?;

    info!(first = arrival.id, second = sequel.id, "Films created successfully");

    let too_early = FilmCreate::new("Too early", NaiveDate::from_ymd_opt(1895, 12, 27).context("invalid date")?);
    if let Err(e) = system.films.create_film(too_early).await {
        info!(error = %e, status = e.status_code(), "Rejected film as expected");
    }

    let span = tracing::info_span!("social");
    async {
        system.friends.add_friend(alice.id, bob.id).await?;
        let friends = system.friends.list_friends(bob.id).await?;
        info!(count = friends.len(), "Bob's friends");

        system.ranker.add_like(sequel.id, alice.id).await?;
        system.ranker.add_like(sequel.id, bob.id).await?;
        system.ranker.add_like(arrival.id, bob.id).await?;
        Ok::<_, filmorate::error::FilmorateError>(())
    }
    .instrument(span)
    .await?;

    match system.ranker.top_films(1).await {
        Ok(top) => {
            for film in &top {
                info!(id = film.id, name = %film.name, likes = film.like_count(), "Most popular");
            }
        }
        Err(e) => error!(error = %e, "Ranking failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
