use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;

fn opt_text(v : &Option<String>) -> &str {
    match v {
        Some(s) => s.as_str(),
        None => "NULL",
    }
}

fn opt_time(v : &Option<NaiveDateTime>) -> String {
    match v {
        Some(t) => t.to_string(),
        None => "NULL".to_string(),
    }
}

/// row produced by the users select statement. columns:
/// (1) user_id int
/// (2) user_name text
/// (3) password text
/// (4) email text
/// (5) created_at timestamp
/// (6) updated_at timestamp
///
/// rows are built empty and filled field by field by the execution layer,
/// no cross field rule is checked here.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct UsersRow {
    user_id : i32,
    user_name : Option<String>,
    password : Option<String>,
    email : Option<String>,
    created_at : Option<NaiveDateTime>,
    updated_at : Option<NaiveDateTime>,
}

impl UsersRow {
    pub fn set_user_id(&mut self, user_id : i32) {self.user_id = user_id;}
    pub fn user_id(&self) -> i32 {self.user_id}

    pub fn set_user_name(&mut self, user_name : Option<String>) {self.user_name = user_name;}
    pub fn user_name(&self) -> Option<&str> {self.user_name.as_deref()}

    pub fn set_password(&mut self, password : Option<String>) {self.password = password;}
    pub fn password(&self) -> Option<&str> {self.password.as_deref()}

    pub fn set_email(&mut self, email : Option<String>) {self.email = email;}
    pub fn email(&self) -> Option<&str> {self.email.as_deref()}

    pub fn set_created_at(&mut self, created_at : Option<NaiveDateTime>) {self.created_at = created_at;}
    pub fn created_at(&self) -> Option<NaiveDateTime> {self.created_at}

    pub fn set_updated_at(&mut self, updated_at : Option<NaiveDateTime>) {self.updated_at = updated_at;}
    pub fn updated_at(&self) -> Option<NaiveDateTime> {self.updated_at}
}

// advisory rendering only, values go out verbatim and nothing parses this back
impl Display for UsersRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[user_id={},user_name={},password={},email={},created_at={},updated_at={}]",
               concat!(module_path!(), "::UsersRow"),
               self.user_id,
               opt_text(&self.user_name),
               opt_text(&self.password),
               opt_text(&self.email),
               opt_time(&self.created_at),
               opt_time(&self.updated_at))
    }
}

/// single column row for the user name lookup statement.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct UserNameRow {
    user_name : Option<String>,
}

impl UserNameRow {
    pub fn set_user_name(&mut self, user_name : Option<String>) {self.user_name = user_name;}
    pub fn user_name(&self) -> Option<&str> {self.user_name.as_deref()}
}

impl Display for UserNameRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[user_name={}]",
               concat!(module_path!(), "::UserNameRow"),
               opt_text(&self.user_name))
    }
}
