#![cfg(feature = "host")]

use pagectl::{
    Container, Error, HostPage, NoopView, PaginationConfig, PaginationController, SearchResult,
};

const HOST: &str = "tests/goldens/pages/search.html";

#[test]
fn controls_render_into_host_page() {
    let page = HostPage::load(HOST).expect("load host page");
    let container = page.container("paginationControls").expect("container");
    assert!(container.children().is_empty());

    let results = SearchResult::load("tests/goldens/results.json").unwrap();
    let config = PaginationConfig {
        page_size: 3,
        ..Default::default()
    };
    let mut controller = PaginationController::new(results, config, container, NoopView).unwrap();
    controller.render().unwrap();
    controller.activate_label("2").unwrap();

    let html = page.render_with(&[controller.container()]).unwrap();
    assert!(html.contains("<title>Game Search</title>"));
    assert!(html.contains(concat!(
        "<div id=\"paginationControls\">",
        "<button data-page=\"1\">Previous</button>",
        "<button data-page=\"1\">1</button>",
        "<button class=\"active\" data-page=\"2\">2</button>",
        "<button data-page=\"3\">3</button>",
        "<button data-page=\"3\">Next</button>",
        "</div>"
    )));
}

#[test]
fn rendered_controls_survive_a_reload() {
    let page = HostPage::load(HOST).unwrap();
    let mut controller = PaginationController::new(
        vec![(); 25],
        PaginationConfig::default(),
        page.container("paginationControls").unwrap(),
        NoopView,
    )
    .unwrap();
    controller.set_page(3).unwrap();
    let html = page.render_with(&[controller.container()]).unwrap();

    // Re-parse the serialized page and keep navigating from its controls
    let reloaded = HostPage::parse(&html).container("paginationControls").unwrap();
    assert_eq!(reloaded.to_text(), "Previous 1 2 [3] (Next)");

    let mut controller =
        PaginationController::new(vec![(); 25], PaginationConfig::default(), reloaded, NoopView)
            .unwrap();
    assert!(controller.activate_label("Previous").unwrap());
    assert_eq!(controller.current_page(), 2);
    assert!(controller.activate_label("Next").unwrap());
    assert_eq!(controller.current_page(), 3);
}

#[test]
fn missing_container_is_a_typed_error() {
    let page = HostPage::parse("<html><body><div id=\"other\"></div></body></html>");
    assert!(matches!(
        page.container("paginationControls"),
        Err(Error::ContainerNotFound(ref id)) if id == "paginationControls"
    ));
}
