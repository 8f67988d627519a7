use super::*;

#[tokio::test]
async fn created_movies_are_listed_under_generated_ids() {
    let ctx = ApiContext::default();

    let first = create_movie(&ctx, MovieRecordInput::new("A", "ot", "2020-01-01")).await;
    let second = create_movie(&ctx, MovieRecordInput::new("B", "crawl", "2020-02-02")).await;

    assert_ne!(first, second);
    let listed = list_movies(&ctx).await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[&first].title, "A");
    assert_eq!(listed[&first].opening_text, "ot");
    assert_eq!(listed[&first].release_date, "2020-01-01");
    assert_eq!(listed[&second].title, "B");
}

#[tokio::test]
async fn ids_sort_in_insertion_order() {
    let ctx = ApiContext::default();
    let mut created = Vec::new();
    for n in 0..12 {
        created.push(create_movie(&ctx, MovieRecordInput::new(format!("m{n}"), "", "")).await);
    }

    let listed: Vec<String> = list_movies(&ctx).await.into_keys().collect();

    assert_eq!(listed, created);
}

#[tokio::test]
async fn seeding_adds_demo_catalogue() {
    let ctx = ApiContext::default();
    assert!(ctx.store.is_empty().await);

    seed_demo_movies(&ctx).await;

    assert_eq!(ctx.store.len().await, demo_movies().len());
    let titles: Vec<String> = list_movies(&ctx)
        .await
        .into_values()
        .map(|fields| fields.title)
        .collect();
    assert_eq!(titles, vec!["Some Dummy Movie", "Some Dummy Movie 2"]);
}
