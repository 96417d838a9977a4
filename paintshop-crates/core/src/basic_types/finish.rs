use std::fmt::Display;

/// The two finishes a position can be given. [`Finish::Matte`] is the costly one, the solver
/// minimises the number of positions that receive it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Finish {
    Glossy,
    Matte,
}

impl Finish {
    /// The single-letter code used in the text format and in rendered solutions.
    pub fn code(self) -> char {
        match self {
            Finish::Glossy => 'G',
            Finish::Matte => 'M',
        }
    }

    pub fn from_code(code: &str) -> Option<Finish> {
        match code {
            "G" => Some(Finish::Glossy),
            "M" => Some(Finish::Matte),
            _ => None,
        }
    }
}

impl Display for Finish {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_recognised() {
        assert_eq!(Finish::from_code("G"), Some(Finish::Glossy));
        assert_eq!(Finish::from_code("M"), Some(Finish::Matte));
        assert_eq!(Finish::from_code("g"), None);
        assert_eq!(Finish::from_code("GM"), None);
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(format!("{}", Finish::Matte), "M");
        assert_eq!(format!("{}", Finish::Glossy), "G");
    }
}
