//! Data models for the bookstore server

pub mod book;
