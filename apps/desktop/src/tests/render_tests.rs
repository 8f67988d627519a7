use super::*;

fn movie(id: &str, title: &str, release_date: &str, opening_text: &str) -> MovieRecord {
    MovieRecord {
        id: MovieId::new(id),
        title: title.into(),
        opening_text: opening_text.into(),
        release_date: release_date.into(),
    }
}

#[test]
fn item_shows_title_date_and_opening_text() {
    let rendered = render_movie(&movie("k1", "A", "2020-01-01", "ot"));
    assert_eq!(rendered, "## A\n### 2020-01-01\not");
}

#[test]
fn missing_fields_render_empty() {
    let rendered = render_movie(&movie("k1", "", "", ""));
    assert_eq!(rendered, "## \n### \n");
}

#[test]
fn list_keeps_order_and_keys() {
    let movies = vec![
        movie("b", "Second", "2001", "two"),
        movie("a", "First", "2000", "one"),
    ];

    let rendered = render_movie_list(&movies);

    let keys: Vec<&str> = rendered.iter().map(|item| item.key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a"]);
    assert_eq!(rendered[1].text, "## First\n### 2000\none");
}

#[test]
fn views_render_their_messages() {
    assert_eq!(render_view(&ViewKind::Loading), "Loading...");
    assert_eq!(render_view(&ViewKind::Empty), "Found No Movies");
    assert_eq!(
        render_view(&ViewKind::Error("Something went wrong".into())),
        "Something went wrong"
    );
}

#[test]
fn list_view_separates_items_with_blank_line() {
    let view = ViewKind::List(vec![
        movie("1", "A", "2020", "x"),
        movie("2", "B", "2021", "y"),
    ]);

    assert_eq!(render_view(&view), "## A\n### 2020\nx\n\n## B\n### 2021\ny");
}
