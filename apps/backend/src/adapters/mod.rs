//! SeaORM adapters. Functions here return `DbErr`; repos map it to `DomainError`.

pub mod actors_sea;
pub mod movies_sea;
