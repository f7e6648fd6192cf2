//! End-to-end route queries against the compiled-in tables.

use province_routes::province::Province::*;
use province_routes::translator::{to_canonical, to_localized};
use province_routes::{Language, QueryError, RouteQueryService, RouteStatus};

#[test]
fn kabul_to_parwan_is_a_stored_route() {
    let check = RouteQueryService::builtin().check_route("Kabul", "Parwan").unwrap();
    assert!(check.connected());
    assert_eq!(check.status, RouteStatus::TableRoute);
    assert_eq!(check.path.as_ref().unwrap().provinces(), &[Kabul, Parwan]);
    assert_eq!(check.hops(), 1);
}

#[test]
fn badakhshan_to_takhar() {
    let check = RouteQueryService::builtin()
        .check_route("Badakhshan", "Takhar")
        .unwrap();
    assert_eq!(check.path.as_ref().unwrap().provinces(), &[Badakhshan, Takhar]);
    assert_eq!(check.hops(), 1);
}

#[test]
fn kabul_to_badakhshan_reverses_stored_route() {
    let check = RouteQueryService::builtin()
        .check_route("Kabul", "Badakhshan")
        .unwrap();
    assert_eq!(
        check.path.as_ref().unwrap().provinces(),
        &[Kabul, Parwan, Baghlan, Kunduz, Takhar, Badakhshan]
    );
    assert_eq!(check.hops(), 5);
    assert_eq!(
        check.localized().en,
        "Kabul → Parwan → Baghlan → Kunduz → Takhar → Badakhshan"
    );
}

#[test]
fn shortest_route_kabul_to_laghman_is_direct() {
    let route = RouteQueryService::builtin()
        .shortest_route("Kabul", "Laghman")
        .unwrap()
        .expect("reachable");
    assert_eq!(route.provinces(), &[Kabul, Laghman]);
    assert_eq!(route.hops(), 1);
}

#[test]
fn find_routes_kabul_to_nangarhar_within_two_hops() {
    let routes = RouteQueryService::builtin()
        .find_routes("Kabul", "Nangarhar", 2)
        .unwrap();
    assert!(routes.iter().any(|r| r.provinces() == [Kabul, Laghman, Nangarhar]));
    assert!(routes.iter().any(|r| r.provinces() == [Kabul, Nangarhar]));
    assert!(routes.iter().all(|r| r.hops() <= 2));
}

#[test]
fn dari_and_pashto_names_for_kabul() {
    assert_eq!(to_canonical("کابل"), Some(Kabul));
    assert_eq!(to_localized(Kabul, Language::Pbt), "کابل");
}

#[test]
fn localized_inputs_resolve_in_queries() {
    let service = RouteQueryService::builtin();
    let check = service.check_route("کابل", "قندهار").unwrap();
    assert!(check.connected());
    let path = check.path.unwrap();
    assert_eq!(path.origin(), Some(Kabul));
    assert_eq!(path.destination(), Some(Kandahar));
}

#[test]
fn unknown_province_is_not_found() {
    let err = RouteQueryService::builtin()
        .check_route("Atlantis", "Kabul")
        .unwrap_err();
    assert!(matches!(err, QueryError::ProvinceNotFound { ref input } if input == "Atlantis"));
}

#[test]
fn isolated_province_without_table_entry_is_not_connected() {
    let check = RouteQueryService::builtin()
        .check_route("Badghis", "Khost")
        .unwrap();
    assert_eq!(check.status, RouteStatus::NotConnected);
    assert!(check.path.is_none());
    assert_eq!(check.hops(), 0);
}

#[test]
fn placeholder_table_entry_is_treated_as_absent() {
    let check = RouteQueryService::builtin()
        .check_route("Badghis", "Baghlan")
        .unwrap();
    assert_eq!(check.status, RouteStatus::NotConnected);
}

#[test]
fn table_reaches_provinces_the_graph_cannot() {
    let service = RouteQueryService::builtin();
    assert!(service.check_route("Kabul", "Herat").unwrap().connected());
    assert!(service.shortest_route("Kabul", "Herat").unwrap().is_none());
    assert!(service.find_routes("Kabul", "Herat", 8).unwrap().is_empty());
}
