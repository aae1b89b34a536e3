use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    code: String,
    zone: String,
    capacity: u32,
}

#[derive(Debug)]
struct BinCreate {
    code: String,
    zone: String,
    capacity: u32,
}

#[derive(Debug)]
struct BinUpdate {
    capacity: u32,
}

#[derive(Debug, Default)]
struct BinFilter {
    zone: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum BinError {
    #[error("Bin code must not be empty")]
    EmptyCode,
    #[error("Zone {0} is closed")]
    ClosedZone(String),
    #[error("Capacity must be positive")]
    ZeroCapacity,
}

#[async_trait]
impl ActorEntity for Bin {
    type Id = u32;
    type Create = BinCreate;
    type Update = BinUpdate;
    type Filter = BinFilter;
    type Context = ();
    type Error = BinError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
        if params.code.is_empty() {
            return Err(BinError::EmptyCode);
        }
        Ok(Self {
            id,
            code: params.code,
            zone: params.zone,
            capacity: params.capacity,
        })
    }

    fn matches(&self, filter: &BinFilter) -> bool {
        filter.zone.as_ref().map_or(true, |zone| zone == &self.zone)
    }

    fn unique_keys(&self) -> Vec<String> {
        vec![format!("code:{}", self.code)]
    }

    async fn validate(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.zone == "closed" {
            return Err(BinError::ClosedZone(self.zone.clone()));
        }
        Ok(())
    }

    async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if update.capacity == 0 {
            return Err(BinError::ZeroCapacity);
        }
        self.capacity = update.capacity;
        Ok(())
    }
}

fn bin(code: &str, zone: &str) -> BinCreate {
    BinCreate {
        code: code.to_string(),
        zone: zone.to_string(),
        capacity: 10,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_create_get_list_update() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(bin("A-1", "north")).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    let created = client
        .create_many(vec![bin("A-2", "north"), bin("B-1", "south")])
        .await
        .unwrap();
    let ids: Vec<u32> = created.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 3]);

    let north = client
        .list(BinFilter {
            zone: Some("north".into()),
        })
        .await
        .unwrap();
    let codes: Vec<&str> = north.iter().map(|b| b.code.as_str()).collect();
    assert_eq!(codes, vec!["A-1", "A-2"]);

    let all = client.list(BinFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);

    let updated = client.update(3, BinUpdate { capacity: 40 }).await.unwrap();
    assert_eq!(updated.capacity, 40);

    let fetched = client.get(3).await.unwrap().unwrap();
    assert_eq!(fetched.capacity, 40);
    assert!(client.get(99).await.unwrap().is_none());

    let missing = client.update(99, BinUpdate { capacity: 1 }).await;
    assert!(matches!(missing, Err(FrameworkError::NotFound(_))));
}

#[tokio::test]
async fn test_batch_with_duplicate_key_is_rejected_whole() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let result = client
        .create_many(vec![bin("A-1", "north"), bin("A-2", "north"), bin("A-1", "south")])
        .await;
    match result {
        Err(FrameworkError::Conflict(key)) => assert_eq!(key, "code:A-1"),
        other => panic!("Expected conflict, got {other:?}"),
    }
    assert!(client.list(BinFilter::default()).await.unwrap().is_empty());

    // Rejected batches don't consume IDs
    let id = client.create(bin("A-1", "north")).await.unwrap();
    assert_eq!(id, 1);

    let again = client.create(bin("A-1", "south")).await;
    assert!(matches!(again, Err(FrameworkError::Conflict(_))));
}

#[tokio::test]
async fn test_failed_validation_leaves_store_untouched() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let result = client
        .create_many(vec![bin("A-1", "north"), bin("C-1", "closed")])
        .await;
    match result {
        Err(FrameworkError::EntityError(e)) => assert_eq!(e.to_string(), "Zone closed is closed"),
        other => panic!("Expected entity error, got {other:?}"),
    }

    let invalid = client.create_many(vec![bin("", "north")]).await;
    assert!(matches!(invalid, Err(FrameworkError::EntityError(_))));

    assert!(client.list(BinFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_channel_reports_actor_closed() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    drop(actor);

    let result = client.list(BinFilter::default()).await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
