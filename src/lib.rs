use crate::conf::Conf;
use rocket::{Build, Rocket};

pub mod client;
pub mod conf;
pub mod controller;
pub mod deadline;
pub mod model;
pub mod provider;
pub mod repository;
pub mod service;

#[cfg(test)]
mod test;

pub fn prepare(rocket: Rocket<Build>, conf: Conf) -> Rocket<Build> {
    rocket
        .mount("/", rocket::routes![controller::quote::get])
        .manage(conf)
}
