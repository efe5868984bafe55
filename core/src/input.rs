use crate::error::KeyError;

/// Resolves `key` against `candidates`: exact match first, then a unique
/// case-insensitive prefix. Lets users type `bret` for `Bretagne`.
pub fn expand_key<'a>(key: &str, candidates: &[&'a str]) -> Result<&'a str, KeyError> {
    let key = key.trim();

    // 1. Exact match
    if let Some(exact) = candidates.iter().copied().find(|&c| c == key) {
        return Ok(exact);
    }

    // 2. Prefix match
    let lowered = key.to_lowercase();
    let matches: Vec<&str> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&lowered))
        .copied()
        .collect();

    match matches.len() {
        1 => Ok(matches[0]),
        0 => Err(KeyError::Unknown(key.to_string())),
        _ => {
            // A case-insensitive full match beats longer candidates sharing the prefix.
            if let Some(full) = matches.iter().copied().find(|c| c.to_lowercase() == lowered) {
                return Ok(full);
            }
            Err(KeyError::Ambiguous {
                key: key.to_string(),
                matches: matches.iter().map(|m| m.to_string()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_key() {
        let candidates = vec!["Bretagne", "Bourgogne-Franche-Comté", "Normandie", "Nouvelle-Aquitaine"];

        assert_eq!(expand_key("Bretagne", &candidates).unwrap(), "Bretagne");
        assert_eq!(expand_key("bret", &candidates).unwrap(), "Bretagne");
        assert_eq!(expand_key("Bou", &candidates).unwrap(), "Bourgogne-Franche-Comté");
        assert_eq!(expand_key("nor", &candidates).unwrap(), "Normandie");

        // Ambiguous
        assert!(matches!(expand_key("b", &candidates), Err(KeyError::Ambiguous { .. })));
        assert!(matches!(expand_key("no", &candidates), Err(KeyError::Ambiguous { .. })));

        // Unknown
        assert_eq!(expand_key("x", &candidates), Err(KeyError::Unknown("x".to_string())));
    }

    #[test]
    fn test_full_name_beats_longer_prefix_match() {
        let candidates = vec!["Est", "Est-Centre"];
        assert_eq!(expand_key("est", &candidates).unwrap(), "Est");
    }
}
