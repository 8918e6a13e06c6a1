use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One attribute of a partial update.
///
/// With `#[serde(default)]` on the field, a missing key is `Absent`, an
/// explicit `null` is `Clear` and any other value is `Set`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Patch<T> {
    #[default]
    Absent,
    Clear,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_set(&self) -> Option<&T> {
        match self {
            Patch::Set(value) => Some(value),
            _ => None,
        }
    }

    /// Applies the patch to an optional stored value.
    pub fn apply_to(self, target: &mut Option<T>) {
        match self {
            Patch::Absent => {}
            Patch::Clear => *target = None,
            Patch::Set(value) => *target = Some(value),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Patch::Clear, Patch::Set)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Absent | Patch::Clear => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        note: Patch<String>,
    }

    #[test]
    fn test_missing_key_is_absent() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(probe.note, Patch::Absent);
    }

    #[test]
    fn test_null_is_clear() {
        let probe: Probe = serde_json::from_str(r#"{"note": null}"#).unwrap();
        assert_eq!(probe.note, Patch::Clear);
    }

    #[test]
    fn test_value_is_set() {
        let probe: Probe = serde_json::from_str(r#"{"note": "hi"}"#).unwrap();
        assert_eq!(probe.note, Patch::Set("hi".to_string()));
    }

    #[test]
    fn test_apply_to_optional() {
        let mut stored = Some(5);
        Patch::Absent.apply_to(&mut stored);
        assert_eq!(stored, Some(5));
        Patch::Set(7).apply_to(&mut stored);
        assert_eq!(stored, Some(7));
        Patch::Clear.apply_to(&mut stored);
        assert_eq!(stored, None);
    }
}
