use crate::auth::page::sign_up::AccountType;
use crate::auth::route::Route;
use crate::backend::{AuthError, Session};

#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the current screen, dropping its draft.
    Navigate(Route),
    SignIn(SignInMessage),
    SignUp(SignUpMessage),
    Reset(ResetMessage),
    Verification(VerificationMessage),
    ResetPassword(ResetPasswordMessage),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInField {
    Email,
    Password,
}

#[derive(Debug, Clone)]
pub enum SignInMessage {
    FieldEdited(SignInField, String),
    TogglePassword,
    Submit,
    Submitted(Result<Session, AuthError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    FirstName,
    LastName,
    CompanyName,
    Email,
    Password,
}

#[derive(Debug, Clone)]
pub enum SignUpMessage {
    AccountTypeSelected(AccountType),
    FieldEdited(SignUpField, String),
    TogglePassword,
    Submit,
    Submitted(Result<(), AuthError>),
}

#[derive(Debug, Clone)]
pub enum ResetMessage {
    EmailEdited(String),
    Submit,
    Submitted(Result<(), AuthError>),
}

#[derive(Debug, Clone)]
pub enum VerificationMessage {
    SlotEdited(usize, String),
    Submit,
    Submitted(Result<(), AuthError>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordField {
    New,
    Confirm,
}

#[derive(Debug, Clone)]
pub enum ResetPasswordMessage {
    FieldEdited(PasswordField, String),
    TogglePassword(PasswordField),
    Submit,
    Submitted(Result<(), AuthError>),
}
