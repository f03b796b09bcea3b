use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Discipline {
    Software,
    Civil,
    Mechanical,
    Electrical,
    Chemical,
}

impl Default for Discipline {
    fn default() -> Self {
        Discipline::Software
    }
}

impl Discipline {
    pub const ALL: [Discipline; 5] = [
        Discipline::Software,
        Discipline::Civil,
        Discipline::Mechanical,
        Discipline::Electrical,
        Discipline::Chemical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Discipline::Software => "Software Engineering",
            Discipline::Civil => "Civil Engineering",
            Discipline::Mechanical => "Mechanical Engineering",
            Discipline::Electrical => "Electrical Engineering",
            Discipline::Chemical => "Chemical Engineering",
        }
    }

    /// Maps a free-form role string onto a discipline, falling back to the
    /// default library when nothing matches.
    pub fn resolve(role: &str) -> RoleResolution {
        let normalized = normalize_role(role);
        let needle = normalized.to_lowercase();

        if needle.is_empty() {
            return RoleResolution::fallback(normalized);
        }

        for discipline in Discipline::ALL {
            if discipline.label().eq_ignore_ascii_case(&needle) {
                return RoleResolution::matched(discipline, normalized);
            }
        }

        if let Some((_, discipline)) = ROLE_TABLE
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(&needle))
        {
            return RoleResolution::matched(*discipline, normalized);
        }

        let partial = ROLE_TABLE.iter().find(|(key, _)| {
            let key = key.to_lowercase();
            needle.contains(&key) || (needle.len() >= 3 && key.contains(&needle))
        });
        if let Some((_, discipline)) = partial {
            return RoleResolution::matched(*discipline, normalized);
        }

        RoleResolution::fallback(normalized)
    }
}

impl std::fmt::Display for Discipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleResolution {
    pub discipline: Discipline,
    /// Whitespace-normalised role as the caller supplied it.
    pub role: String,
    pub used_fallback: bool,
}

impl RoleResolution {
    fn matched(discipline: Discipline, role: String) -> Self {
        Self {
            discipline,
            role,
            used_fallback: false,
        }
    }

    fn fallback(role: String) -> Self {
        let discipline = Discipline::default();
        let role = if role.is_empty() {
            discipline.label().to_string()
        } else {
            role
        };
        Self {
            discipline,
            role,
            used_fallback: true,
        }
    }
}

pub fn normalize_role(role: &str) -> String {
    role.split_whitespace().collect::<Vec<_>>().join(" ")
}

const ROLE_TABLE: &[(&str, Discipline)] = &[
    ("Software Engineer", Discipline::Software),
    ("Frontend Engineer", Discipline::Software),
    ("Backend Engineer", Discipline::Software),
    ("Fullstack Engineer", Discipline::Software),
    ("DevOps Engineer", Discipline::Software),
    ("SRE", Discipline::Software),
    ("Security Engineer", Discipline::Software),
    ("Mobile Engineer", Discipline::Software),
    ("Data Engineer", Discipline::Software),
    ("Machine Learning Engineer", Discipline::Software),
    ("ML Engineer", Discipline::Software),
    ("AI Engineer", Discipline::Software),
    ("Platform Engineer", Discipline::Software),
    ("Infrastructure Engineer", Discipline::Software),
    ("Cloud Engineer", Discipline::Software),
    ("Solutions Architect", Discipline::Software),
    ("Technical Lead", Discipline::Software),
    ("Engineering Manager", Discipline::Software),
    ("Civil Engineer", Discipline::Civil),
    ("Structural Engineer", Discipline::Civil),
    ("Geotechnical Engineer", Discipline::Civil),
    ("Transportation Engineer", Discipline::Civil),
    ("Environmental Engineer", Discipline::Civil),
    ("Water Resources Engineer", Discipline::Civil),
    ("Construction Engineer", Discipline::Civil),
    ("Mechanical Engineer", Discipline::Mechanical),
    ("Aerospace Engineer", Discipline::Mechanical),
    ("Automotive Engineer", Discipline::Mechanical),
    ("Manufacturing Engineer", Discipline::Mechanical),
    ("Robotics Engineer", Discipline::Mechanical),
    ("HVAC Engineer", Discipline::Mechanical),
    ("Thermal Engineer", Discipline::Mechanical),
    ("Fluid Dynamics Engineer", Discipline::Mechanical),
    ("Electrical Engineer", Discipline::Electrical),
    ("Electronics Engineer", Discipline::Electrical),
    ("Power Systems Engineer", Discipline::Electrical),
    ("Control Systems Engineer", Discipline::Electrical),
    ("Communications Engineer", Discipline::Electrical),
    ("Signal Processing Engineer", Discipline::Electrical),
    ("Embedded Systems Engineer", Discipline::Electrical),
    ("RF Engineer", Discipline::Electrical),
    ("Hardware Engineer", Discipline::Electrical),
    ("Chemical Engineer", Discipline::Chemical),
    ("Process Engineer", Discipline::Chemical),
    ("Petroleum Engineer", Discipline::Chemical),
    ("Materials Engineer", Discipline::Chemical),
    ("Biomedical Engineer", Discipline::Chemical),
    ("Biochemical Engineer", Discipline::Chemical),
    ("Nuclear Engineer", Discipline::Chemical),
    ("Pharmaceutical Engineer", Discipline::Chemical),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_roles_resolve_to_their_discipline() {
        assert_eq!(Discipline::resolve("HVAC Engineer").discipline, Discipline::Mechanical);
        assert_eq!(Discipline::resolve("Process Engineer").discipline, Discipline::Chemical);
        assert_eq!(Discipline::resolve("geotechnical engineer").discipline, Discipline::Civil);
        assert_eq!(Discipline::resolve("Civil Engineering").discipline, Discipline::Civil);
    }

    #[test]
    fn role_is_whitespace_normalised() {
        let resolution = Discipline::resolve("  Power   Systems Engineer ");
        assert_eq!(resolution.discipline, Discipline::Electrical);
        assert_eq!(resolution.role, "Power Systems Engineer");
        assert!(!resolution.used_fallback);
    }

    #[test]
    fn partial_role_matches() {
        let resolution = Discipline::resolve("Senior Structural Engineer");
        assert_eq!(resolution.discipline, Discipline::Civil);
        assert!(!resolution.used_fallback);
    }

    #[test]
    fn unknown_role_falls_back_to_default() {
        let resolution = Discipline::resolve("Invalid Role");
        assert_eq!(resolution.discipline, Discipline::Software);
        assert_eq!(resolution.role, "Invalid Role");
        assert!(resolution.used_fallback);

        let empty = Discipline::resolve("   ");
        assert_eq!(empty.role, "Software Engineering");
        assert!(empty.used_fallback);
    }
}
