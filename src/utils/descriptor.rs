/// Converts a DEX type descriptor (`Lcom/example/FooTest;`) to its dotted
/// Java name. Names already in dotted form are returned unchanged.
pub fn to_class_name(name: &str) -> String {
    let name = name.trim();
    match name
        .strip_prefix('L')
        .and_then(|rest| rest.strip_suffix(';'))
    {
        Some(inner) => inner.replace('/', "."),
        None => name.to_string(),
    }
}

/// Last segment of a dotted class name, nested classes included
/// (`com.example.Outer$InnerTest` gives `Outer$InnerTest`).
pub fn simple_name(class_name: &str) -> &str {
    class_name.rsplit('.').next().unwrap_or(class_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_to_class_name() {
        assert_eq!(
            to_class_name("Lcom/shazam/forktest/IgnoredClassTest;"),
            "com.shazam.forktest.IgnoredClassTest"
        );
    }

    #[test]
    fn test_dotted_name_unchanged() {
        assert_eq!(to_class_name("org.junit.Test"), "org.junit.Test");
    }

    #[test]
    fn test_name_starting_with_l_is_not_a_descriptor() {
        assert_eq!(to_class_name("LoginTest"), "LoginTest");
    }

    #[test]
    fn test_descriptor_whitespace_trimmed() {
        assert_eq!(to_class_name("  Lorg/junit/Ignore; "), "org.junit.Ignore");
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("com.example.LoginTest"), "LoginTest");
        assert_eq!(simple_name("com.example.Outer$InnerTest"), "Outer$InnerTest");
        assert_eq!(simple_name("LoginTest"), "LoginTest");
    }
}
