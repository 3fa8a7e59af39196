use std::fmt;
use std::str::FromStr;

/// Which flow a verification code belongs to, carried as the `mode`
/// query parameter of the verification route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SignUp,
    Reset,
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "signup" => Ok(Mode::SignUp),
            "reset" => Ok(Mode::Reset),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::SignUp => write!(f, "signup"),
            Mode::Reset => write!(f, "reset"),
        }
    }
}

/// Client-side navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
    SignUp,
    Reset,
    Verification(Option<Mode>),
    ResetPassword,
}

impl Route {
    /// Parses the path-and-query form of a route, e.g.
    /// `/auth/verification?mode=signup`.
    ///
    /// An absent or unknown `mode` value is not an error: the
    /// verification screen simply opens without a routing decision.
    pub fn parse(s: &str) -> Result<Self, RouteError> {
        let (path, query) = match s.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (s, None),
        };
        match path {
            "/auth/sign-in" => Ok(Route::SignIn),
            "/auth/sign-up" => Ok(Route::SignUp),
            "/auth/reset" => Ok(Route::Reset),
            "/auth/reset-password" => Ok(Route::ResetPassword),
            "/auth/verification" => Ok(Route::Verification(
                query.and_then(|q| {
                    q.split('&')
                        .find_map(|pair| pair.strip_prefix("mode="))
                        .and_then(|value| Mode::from_str(value).ok())
                }),
            )),
            _ => Err(RouteError::UnknownPath(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Route::SignIn => write!(f, "/auth/sign-in"),
            Route::SignUp => write!(f, "/auth/sign-up"),
            Route::Reset => write!(f, "/auth/reset"),
            Route::Verification(None) => write!(f, "/auth/verification"),
            Route::Verification(Some(mode)) => write!(f, "/auth/verification?mode={}", mode),
            Route::ResetPassword => write!(f, "/auth/reset-password"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownPath(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::UnknownPath(s) => write!(f, "Unknown route: {}", s),
        }
    }
}

impl std::error::Error for RouteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_routes() {
        assert_eq!(Route::parse("/auth/sign-in"), Ok(Route::SignIn));
        assert_eq!(Route::parse("/auth/sign-up"), Ok(Route::SignUp));
        assert_eq!(Route::parse("/auth/reset"), Ok(Route::Reset));
        assert_eq!(Route::parse("/auth/reset-password"), Ok(Route::ResetPassword));
        assert_eq!(
            Route::parse("/auth/verification?mode=signup"),
            Ok(Route::Verification(Some(Mode::SignUp)))
        );
        assert_eq!(
            Route::parse("/auth/verification?mode=reset"),
            Ok(Route::Verification(Some(Mode::Reset)))
        );
        assert!(Route::parse("/auth/unknown").is_err());
        assert!(Route::parse("/").is_err());
    }

    #[test]
    fn unknown_mode_is_not_an_error() {
        assert_eq!(
            Route::parse("/auth/verification"),
            Ok(Route::Verification(None))
        );
        assert_eq!(
            Route::parse("/auth/verification?mode=other"),
            Ok(Route::Verification(None))
        );
        assert_eq!(
            Route::parse("/auth/verification?foo=bar"),
            Ok(Route::Verification(None))
        );
    }

    #[test]
    fn display_roundtrip() {
        for route in [
            Route::SignIn,
            Route::SignUp,
            Route::Reset,
            Route::Verification(None),
            Route::Verification(Some(Mode::SignUp)),
            Route::Verification(Some(Mode::Reset)),
            Route::ResetPassword,
        ] {
            assert_eq!(Route::parse(&route.to_string()), Ok(route));
        }
    }
}
