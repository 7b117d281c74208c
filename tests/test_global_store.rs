use pattern_demos::{ConfigHandle, DEFAULT_ENTRIES, PatternError, acquire, is_initialized};

// Every test in this binary shares the process-wide store, so the mutating
// sequence lives in a single test.
#[test]
fn test_global_store_lifecycle() {
    assert!(!is_initialized());

    let config1 = acquire();
    assert!(is_initialized());

    // defaults, and nothing else
    assert_eq!(config1.get("url").as_deref(), Some("http://example.com"));
    assert_eq!(config1.get("username").as_deref(), Some("admin"));
    assert_eq!(config1.get("password").as_deref(), Some("password"));
    assert_eq!(config1.keys(), vec!["password", "url", "username"]);

    // repeated acquisition neither copies nor re-applies defaults
    let handles: Vec<ConfigHandle> = (0..10).map(|_| acquire()).collect();
    assert!(handles.iter().all(|h| *h == config1));
    assert_eq!(config1.len(), DEFAULT_ENTRIES.len());
    assert!(config1.snapshot().is_default());

    // cross-handle visibility
    let config2 = acquire();
    config1.set("username", "newAdmin");
    assert_eq!(config2.get("username").as_deref(), Some("newAdmin"));
    assert!(handles.iter().all(|h| h.get("username").as_deref() == Some("newAdmin")));

    // a later acquire sees the write, not fresh defaults
    assert_eq!(acquire().get("username").as_deref(), Some("newAdmin"));

    // absent keys are an outcome, not a crash
    assert_eq!(config2.get("nonexistent"), None);
    assert!(matches!(
        config2.require("nonexistent"),
        Err(PatternError::KeyNotFound(ref k)) if k == "nonexistent"
    ));

    // detached stores never alias the global one
    let detached = ConfigHandle::detached();
    detached.set("username", "isolated");
    assert_ne!(detached, config1);
    assert_eq!(config1.get("username").as_deref(), Some("newAdmin"));

    // reset is in place and visible everywhere
    config2.set("timeout", "30");
    config1.reset_to_defaults();
    assert!(config2.snapshot().is_default());
    assert_eq!(acquire().get("timeout"), None);
    assert_eq!(acquire().instance_id(), config1.instance_id());
}
