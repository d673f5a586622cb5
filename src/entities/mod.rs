pub mod character;
pub mod favorite_character;
pub mod favorite_planet;
pub mod favorite_vehicle;
pub mod planet;
pub mod user;
pub mod vehicle;
