pub mod admin;
pub mod auth;
pub mod banners;
pub mod brands;
pub mod categories;
pub mod certificates;
pub mod companies;
pub mod contact;
pub mod dashboard;
pub mod news;
pub mod newsletter;
pub mod products;
