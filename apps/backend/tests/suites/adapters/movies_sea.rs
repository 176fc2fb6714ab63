use agency::adapters::movies_sea::{self, MovieCreate, MovieUpdate};
use agency::errors::domain::{DomainError, NotFoundKind};
use agency::repos::movies;
use time::macros::datetime;

use crate::support::test_state;

#[tokio::test]
async fn release_round_trips_with_offset() {
    let state = test_state().await;
    let db = state.db().expect("db");

    let release = datetime!(1999-03-31 12:00 -05:00);
    let created = movies_sea::create_movie(db, MovieCreate::new("The Matrix", release))
        .await
        .unwrap();

    let found = movies_sea::find_by_id(db, created.id)
        .await
        .unwrap()
        .expect("movie exists");
    assert_eq!(found.title, "The Matrix");
    assert_eq!(found.release, release);
}

#[tokio::test]
async fn update_replaces_title_and_release() {
    let state = test_state().await;
    let db = state.db().expect("db");

    let created = movies_sea::create_movie(
        db,
        MovieCreate::new("Draft", datetime!(2020-01-01 00:00 UTC)),
    )
    .await
    .unwrap();

    let updated = movies_sea::update_movie(
        db,
        MovieUpdate {
            id: created.id,
            title: "Release Cut".into(),
            release: datetime!(2021-02-02 20:00 UTC),
        },
    )
    .await
    .unwrap()
    .expect("movie exists");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Release Cut");
    assert_eq!(updated.release, datetime!(2021-02-02 20:00 UTC));
}

#[tokio::test]
async fn repo_maps_missing_rows_to_movie_not_found() {
    let state = test_state().await;
    let db = state.db().expect("db");

    let err = movies::delete_movie(db, 8).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Movie, _)));

    let err = movies::update_movie(db, 8, "t", datetime!(2020-01-01 00:00 UTC))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Movie, _)));
}
