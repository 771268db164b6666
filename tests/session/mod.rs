//! Tests for the session store lifecycle: restore, login and logout.

mod logout;
mod restore;
