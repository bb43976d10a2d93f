use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Address, NewRestaurant};
use restaurant_store::{InMemoryRestaurantStore, RestaurantQuery, RestaurantStore};

const BOROUGHS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];
const CUISINES: [&str; 4] = ["Bakery", "Pizza", "Thai", "American"];

/// Populate a store with N restaurants spread over boroughs and cuisines.
async fn populate_store(store: &InMemoryRestaurantStore, n: usize) {
    for i in 0..n {
        let draft = NewRestaurant::new(
            format!("Restaurant {i}"),
            BOROUGHS[i % BOROUGHS.len()],
            CUISINES[i % CUISINES.len()],
        )
        .with_address(Address::new(i.to_string(), "Broadway"));
        store.insert(draft).await.unwrap();
    }
}

fn bench_insert(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryRestaurantStore::new();

    c.bench_function("restaurant_store/insert", |b| {
        b.iter(|| {
            rt.block_on(async {
                store
                    .insert(NewRestaurant::new("Bench Bistro", "Queens", "French"))
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_query_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryRestaurantStore::new();
    rt.block_on(populate_store(&store, 1000));

    c.bench_function("restaurant_store/query_borough_cuisine_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let query = RestaurantQuery::new()
                    .borough("Queens")
                    .cuisine("Thai")
                    .limit(10);
                store.query(query).await.unwrap();
            });
        });
    });
}

fn bench_list_views_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = InMemoryRestaurantStore::new();
    rt.block_on(populate_store(&store, 1000));

    c.bench_function("restaurant_store/list_and_project_1000", |b| {
        b.iter(|| {
            rt.block_on(async {
                let restaurants = store.query(RestaurantQuery::new()).await.unwrap();
                let views: Vec<_> = restaurants.iter().map(|r| r.to_view()).collect();
                assert_eq!(views.len(), 1000);
            });
        });
    });
}

criterion_group!(benches, bench_insert, bench_query_1000, bench_list_views_1000);
criterion_main!(benches);
