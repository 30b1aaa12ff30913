use super::*;

#[test]
fn collection_starts_idle_and_empty() {
    let state = ProductsState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn successful_load_replaces_items() {
    let mut state: Collection<u32> = Collection { items: vec![1, 2], loading: false, error: None };
    state.begin_load();
    assert!(state.loading);
    state.finish_load(Ok(vec![7]));
    assert_eq!(state.items, vec![7]);
    assert!(!state.loading);
}

#[test]
fn failed_load_clears_items_and_keeps_message() {
    let mut state: Collection<u32> = Collection { items: vec![1], loading: true, error: None };
    state.finish_load(Err(ApiError::Status { status: 500, message: "boom".to_owned() }));
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn begin_load_clears_previous_error() {
    let mut state: Collection<u32> = Collection { items: Vec::new(), loading: false, error: Some("x".to_owned()) };
    state.begin_load();
    assert!(state.error.is_none());
}

#[test]
fn lookup_distinguishes_not_found_from_failure() {
    assert_eq!(Lookup::from_result(Ok(3)), Lookup::Found(3));
    assert_eq!(Lookup::<u32>::from_result(Err(ApiError::NotFound("nope".to_owned()))), Lookup::NotFound);
    assert_eq!(
        Lookup::<u32>::from_result(Err(ApiError::Network("down".to_owned()))),
        Lookup::Failed(crate::net::api::GENERIC_ERROR_MESSAGE.to_owned())
    );
}

#[test]
fn lookup_defaults_to_loading() {
    let lookup: Lookup<u32> = Lookup::default();
    assert_eq!(lookup, Lookup::Loading);
    assert!(lookup.found().is_none());
}
