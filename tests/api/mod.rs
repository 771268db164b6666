//! Tests for the request pipeline against a mock API.

mod send;
