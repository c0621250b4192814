use actor_framework::{ActorEntity, FrameworkError, IdGenerator, ResourceActor};
use async_trait::async_trait;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Room {
    id: u32,
    name: String,
    floor: u8,
    cleaned: bool,
}

#[derive(Debug)]
struct RoomCreate {
    name: String,
    floor: u8,
}

#[derive(Debug, Default)]
struct RoomUpdate {
    name: Option<String>,
    floor: Option<u8>,
}

#[derive(Debug)]
enum RoomAction {
    MarkCleaned,
}

#[derive(Debug, thiserror::Error)]
enum RoomError {
    #[error("room name must not be empty")]
    EmptyName,
}

#[async_trait]
impl ActorEntity for Room {
    type Id = u32;
    type Create = RoomCreate;
    type Update = RoomUpdate;
    type Action = RoomAction;
    type ActionResult = bool;
    type Context = ();
    type Error = RoomError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: RoomCreate) -> Result<Self, Self::Error> {
        if params.name.is_empty() {
            return Err(RoomError::EmptyName);
        }
        Ok(Self {
            id,
            name: params.name,
            floor: params.floor,
            cleaned: false,
        })
    }

    async fn on_update(&mut self, update: RoomUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(floor) = update.floor {
            self.floor = floor;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: RoomAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            RoomAction::MarkCleaned => {
                let changed = !self.cleaned;
                self.cleaned = true;
                Ok(changed)
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Shift {
    id: u32,
}

#[derive(Debug)]
struct ShiftCreate;

#[derive(Debug)]
struct ShiftUpdate;

#[derive(Debug)]
enum ShiftAction {}

#[derive(Debug, thiserror::Error)]
#[error("shift error")]
struct ShiftError;

#[async_trait]
impl ActorEntity for Shift {
    type Id = u32;
    type Create = ShiftCreate;
    type Update = ShiftUpdate;
    type Action = ShiftAction;
    type ActionResult = ();
    type Context = ();
    type Error = ShiftError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, _params: ShiftCreate) -> Result<Self, Self::Error> {
        Ok(Self { id })
    }

    async fn on_update(&mut self, _: ShiftUpdate, _: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, _: ShiftAction, _: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn room(name: &str, floor: u8) -> RoomCreate {
    RoomCreate {
        name: name.to_string(),
        floor,
    }
}

fn by_name(a: &Room, b: &Room) -> std::cmp::Ordering {
    a.name.cmp(&b.name)
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Room>::new(10);
    tokio::spawn(actor.run(()));

    // Create
    let id = client.create(room("Triage", 1)).await.unwrap();
    assert_eq!(id, 1);

    // Action
    assert!(client.perform_action(id, RoomAction::MarkCleaned).await.unwrap());
    assert!(!client.perform_action(id, RoomAction::MarkCleaned).await.unwrap());

    // Partial update keeps the untouched field
    let update = RoomUpdate {
        name: Some("Recovery".into()),
        ..Default::default()
    };
    let updated = client.update(id, update).await.unwrap();
    assert_eq!(updated.name, "Recovery");
    assert_eq!(updated.floor, 1);
    assert!(updated.cleaned);

    // Delete
    assert_eq!(client.delete(id).await.unwrap(), 1);
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_keeps_insertion_order() {
    let (actor, client) = ResourceActor::<Room>::new(10);
    tokio::spawn(actor.run(()));

    for (name, floor) in [("Xray", 2), ("Atrium", 0), ("Lab", 3)] {
        client.create(room(name, floor)).await.unwrap();
    }

    let names: Vec<String> = client
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["Xray", "Atrium", "Lab"]);
}

#[tokio::test]
async fn test_sort_is_stable_and_idempotent() {
    let (actor, client) = ResourceActor::<Room>::new(10);
    tokio::spawn(actor.run(()));

    let first_lab = client.create(room("Lab", 1)).await.unwrap();
    client.create(room("Atrium", 0)).await.unwrap();
    let second_lab = client.create(room("Lab", 2)).await.unwrap();

    client.sort_by(by_name).await.unwrap();
    let once: Vec<u32> = client.list().await.unwrap().iter().map(|r| r.id).collect();
    client.sort_by(by_name).await.unwrap();
    let twice: Vec<u32> = client.list().await.unwrap().iter().map(|r| r.id).collect();

    assert_eq!(once, vec![2, first_lab, second_lab]);
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_shared_generator_spans_actors() {
    let ids = IdGenerator::default();
    let (room_actor, rooms) = ResourceActor::<Room>::with_ids(10, ids.clone());
    let (shift_actor, shifts) = ResourceActor::<Shift>::with_ids(10, ids.clone());
    tokio::spawn(room_actor.run(()));
    tokio::spawn(shift_actor.run(()));

    assert_eq!(rooms.create(room("Atrium", 0)).await.unwrap(), 1);
    assert_eq!(shifts.create(ShiftCreate).await.unwrap(), 2);
    assert_eq!(rooms.create(room("Lab", 1)).await.unwrap(), 3);
    assert_eq!(ids.peek(), 4);
}

#[tokio::test]
async fn test_rejected_create_still_consumes_id() {
    let (actor, client) = ResourceActor::<Room>::new(10);
    tokio::spawn(actor.run(()));

    let result = client.create(room("", 0)).await;
    let err = result.unwrap_err().into_entity_error::<RoomError>().unwrap();
    assert!(matches!(err, RoomError::EmptyName));

    assert_eq!(client.create(room("Lab", 1)).await.unwrap(), 2);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_ids_report_not_found() {
    let (actor, client) = ResourceActor::<Room>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(room("Lab", 1)).await.unwrap();
    assert_eq!(client.delete(id).await.unwrap(), 1);

    let again = client.delete(id).await;
    assert!(
        matches!(again, Err(FrameworkError::NotFound { entity_type: "Room", ref id }) if id == "1")
    );
    assert!(matches!(
        client.update(id, RoomUpdate::default()).await,
        Err(FrameworkError::NotFound { .. })
    ));
    assert!(matches!(
        client.perform_action(id, RoomAction::MarkCleaned).await,
        Err(FrameworkError::NotFound { .. })
    ));
    assert!(client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_actor() {
    let (actor, client) = ResourceActor::<Room>::new(10);
    drop(actor);

    assert!(matches!(client.list().await, Err(FrameworkError::ActorClosed)));
}
