pub mod reset;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;
pub mod verification;

pub use reset::Reset;
pub use reset_password::ResetPassword;
pub use sign_in::SignIn;
pub use sign_up::SignUp;
pub use verification::Verification;
