use std::fmt;
use std::str::FromStr;

/// City department a complaint is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Department {
    Fire,
    Police,
    Buildings,
    Finance,
    Parks,
}

impl Department {
    /// Every department, in report order.
    pub const ALL: [Department; 5] = [
        Department::Fire,
        Department::Police,
        Department::Buildings,
        Department::Finance,
        Department::Parks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Fire => "fire",
            Department::Police => "police",
            Department::Buildings => "buildings",
            Department::Finance => "finance",
            Department::Parks => "parks",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0:?}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Department::ALL
            .into_iter()
            .find(|department| department.as_str() == needle)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_department_name() {
        for department in Department::ALL {
            assert_eq!(department.as_str().parse::<Department>(), Ok(department));
        }
    }

    #[test]
    fn parsing_ignores_case_and_padding() {
        assert_eq!(" Fire\n".parse::<Department>(), Ok(Department::Fire));
        assert_eq!("PARKS".parse::<Department>(), Ok(Department::Parks));
    }

    #[test]
    fn rejects_labels_outside_the_set() {
        let err = "sanitation".parse::<Department>().unwrap_err();
        assert_eq!(err, UnknownDepartment("sanitation".to_string()));
        assert!("error".parse::<Department>().is_err());
    }
}
