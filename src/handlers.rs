pub mod equipment;
pub mod health;
pub mod users;
pub mod worksites;
