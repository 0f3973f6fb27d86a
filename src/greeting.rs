use crate::error::Error;

const FALLBACK_GREETING: &str = "Greetings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GreetingKind {
    Hello = 0,
    Hi = 1,
    Hey = 2,
}

impl GreetingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GreetingKind::Hello => "Hello",
            GreetingKind::Hi => "Hi",
            GreetingKind::Hey => "Hey",
        }
    }

    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for GreetingKind {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(GreetingKind::Hello),
            1 => Ok(GreetingKind::Hi),
            2 => Ok(GreetingKind::Hey),
            _ => Err(Error::UnknownGreeting(tag)),
        }
    }
}

/// Display word for a raw greeting tag.
///
/// Tags that name no [`GreetingKind`] fall back to `"Greetings"`.
pub fn greeting_word(tag: u8) -> &'static str {
    match GreetingKind::try_from(tag) {
        Ok(kind) => kind.as_str(),
        Err(_) => FALLBACK_GREETING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_kind() {
        assert_eq!(GreetingKind::Hello.as_str(), "Hello");
        assert_eq!(GreetingKind::Hi.as_str(), "Hi");
        assert_eq!(GreetingKind::Hey.as_str(), "Hey");
    }

    #[test]
    fn tags_resolve_to_words() {
        assert_eq!(greeting_word(GreetingKind::Hello.tag()), "Hello");
        assert_eq!(greeting_word(GreetingKind::Hi.tag()), "Hi");
        assert_eq!(greeting_word(GreetingKind::Hey.tag()), "Hey");
    }

    #[test]
    fn unmapped_tag_falls_back() {
        assert_eq!(greeting_word(3), "Greetings");
        assert_eq!(greeting_word(42), "Greetings");
        assert_eq!(greeting_word(u8::MAX), "Greetings");
    }

    #[test]
    fn unmapped_tag_is_rejected() {
        let err = GreetingKind::try_from(7).unwrap_err();
        assert!(matches!(err, Error::UnknownGreeting(7)));
        assert_eq!(err.to_string(), "Unknown greeting tag: 7");
    }
}
