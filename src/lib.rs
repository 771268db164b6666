//! MentorLink browser client.
//!
//! The `client` module holds the session/access-control gateway (request pipeline,
//! session store, access guard) and the Dioxus application shell built on top of it.
//! `model` holds the data transfer objects exchanged with the MentorLink API.

#![allow(non_snake_case)]

pub mod client;
pub mod model;
