//! Small mutation helpers over the registry.

use folio_types::error::Result;

use crate::SurfaceRegistry;

/// Set an object's visibility.
pub fn set_visible(sdi: &mut SurfaceRegistry, name: &str, visible: bool) -> Result<()> {
    sdi.get_mut(name)?.visible = visible;
    Ok(())
}

/// Names from `names` that are missing from the registry.
pub fn missing<'a>(sdi: &SurfaceRegistry, names: &[&'a str]) -> Vec<&'a str> {
    names
        .iter()
        .copied()
        .filter(|n| !sdi.contains(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_visible_missing_errors() {
        let mut sdi = SurfaceRegistry::new();
        assert!(set_visible(&mut sdi, "w", true).is_err());
        sdi.create("w");
        set_visible(&mut sdi, "w", true).unwrap();
        assert!(sdi.get("w").unwrap().visible);
    }

    #[test]
    fn missing_lists_absent_names() {
        let mut sdi = SurfaceRegistry::new();
        sdi.create("a");
        assert_eq!(missing(&sdi, &["a", "b", "c"]), vec!["b", "c"]);
    }
}
