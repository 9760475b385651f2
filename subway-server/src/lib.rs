//! Subway shortest-route server.
//!
//! A web application that answers: "what is the shortest route
//! between these two stations on the subway network?"

pub mod domain;
pub mod network;
pub mod path;
pub mod routing;
pub mod web;
