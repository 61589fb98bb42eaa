//! Roster fijo de usuarios
//!
//! La aplicación trabaja con una lista cerrada de usuarios definida en
//! configuración, no con gestión dinámica de usuarios. El ORDEN del roster
//! es significativo: el desempate de la rotación usa la posición en la lista.

use lazy_static::lazy_static;

/// Miembro del roster con su credencial en texto plano (stub de mundo cerrado)
#[derive(Debug, Clone, PartialEq)]
pub struct RosterMember {
    pub username: String,
    pub password: String,
}

lazy_static! {
    /// Roster observado en la configuración original: 4 usuarios fijos
    static ref DEFAULT_MEMBERS: Vec<RosterMember> = vec![
        RosterMember { username: "Jony".to_string(), password: "1234".to_string() },
        RosterMember { username: "Fafa".to_string(), password: "1234".to_string() },
        RosterMember { username: "Danas".to_string(), password: "1234".to_string() },
        RosterMember { username: "Telmin".to_string(), password: "1234".to_string() },
    ];
}

/// Lista cerrada y ordenada de usuarios válidos
#[derive(Debug, Clone)]
pub struct Roster {
    members: Vec<RosterMember>,
}

impl Default for Roster {
    fn default() -> Self {
        Self { members: DEFAULT_MEMBERS.clone() }
    }
}

impl Roster {
    /// Cargar el roster desde la variable ROSTER (`user:pass,user:pass,...`),
    /// con fallback al roster por defecto
    pub fn from_env() -> Self {
        match std::env::var("ROSTER") {
            Ok(spec) => Self::parse(&spec).unwrap_or_else(|| {
                tracing::warn!("⚠️ ROSTER inválido, usando el roster por defecto");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parsear un roster desde `user:pass,user:pass,...`; None si queda vacío
    pub fn parse(spec: &str) -> Option<Self> {
        let members: Vec<RosterMember> = spec
            .split(',')
            .filter_map(|entry| {
                let (username, password) = entry.trim().split_once(':')?;
                if username.is_empty() {
                    return None;
                }
                Some(RosterMember {
                    username: username.to_string(),
                    password: password.to_string(),
                })
            })
            .collect();

        if members.is_empty() {
            None
        } else {
            Some(Self { members })
        }
    }

    pub fn members(&self) -> &[RosterMember] {
        &self.members
    }

    /// Nombres de usuario en orden de roster
    pub fn usernames(&self) -> Vec<String> {
        self.members.iter().map(|m| m.username.clone()).collect()
    }

    pub fn find(&self, username: &str) -> Option<&RosterMember> {
        self.members.iter().find(|m| m.username == username)
    }

    pub fn contains(&self, username: &str) -> bool {
        self.find(username).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_has_four_members() {
        let roster = Roster::default();
        assert_eq!(roster.usernames(), vec!["Jony", "Fafa", "Danas", "Telmin"]);
    }

    #[test]
    fn test_parse_preserves_order() {
        let roster = Roster::parse("Ana:pw1,Bruno:pw2,Carla:pw3").unwrap();
        assert_eq!(roster.usernames(), vec!["Ana", "Bruno", "Carla"]);
        assert_eq!(roster.find("Bruno").unwrap().password, "pw2");
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let roster = Roster::parse("Ana:pw1,sin-separador,:sinusuario,Bruno:pw2").unwrap();
        assert_eq!(roster.usernames(), vec!["Ana", "Bruno"]);
    }

    #[test]
    fn test_parse_empty_spec_is_none() {
        assert!(Roster::parse("").is_none());
        assert!(Roster::parse("no-valido").is_none());
    }

    #[test]
    fn test_contains() {
        let roster = Roster::default();
        assert!(roster.contains("Danas"));
        assert!(!roster.contains("Desconocido"));
    }
}
