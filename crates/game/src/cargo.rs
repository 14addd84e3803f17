//! Cargo pads, the aircraft's hold, and the pickup/delivery economy.

use glam::Vec3;
use rand::Rng;

/// Maximum distance from a pad's marker at which interaction works.
pub const INTERACTION_RADIUS: f32 = 50.0;

/// One contract riding in the hold.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoItem {
    pub origin: String,
    pub destination: String,
    pub weight: f32,
    pub value: u32,
}

/// A named pad on the map that can offer and receive cargo.
#[derive(Debug, Clone)]
pub struct CargoLocation {
    pub name: String,
    pub position: Vec3,
    /// Marker tint, linear RGB.
    pub color: [f32; 3],
    pub has_cargo: bool,
}

/// The five pads of the delivery network. Whether each starts with cargo
/// waiting is decided by coin flip.
pub fn default_locations<R: Rng>(rng: &mut R) -> Vec<CargoLocation> {
    let pads: [(&str, f32, f32, [f32; 3]); 5] = [
        ("Ana Havalimanı", 0.0, 200.0, [1.0, 0.0, 0.0]),
        ("Kuzey Limanı", 1000.0, 1000.0, [0.0, 1.0, 0.0]),
        ("Güney Köyü", -1000.0, -1000.0, [0.0, 0.0, 1.0]),
        ("Doğu Şehri", 1600.0, -600.0, [1.0, 1.0, 0.0]),
        ("Batı Kasabası", -1600.0, 600.0, [1.0, 0.0, 1.0]),
    ];
    pads.iter()
        .map(|&(name, x, z, color)| CargoLocation {
            name: name.to_string(),
            position: Vec3::new(x, 0.5, z),
            color,
            has_cargo: rng.gen_bool(0.5),
        })
        .collect()
}

/// The aircraft's cargo hold. Weight is tracked incrementally alongside the
/// item list so the flight model reads it without summing every frame.
#[derive(Debug, Clone, Default)]
pub struct CargoHold {
    items: Vec<CargoItem>,
    total_weight: f32,
}

impl CargoHold {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CargoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    /// The contract shown in the HUD's mission panel.
    pub fn current_mission(&self) -> Option<&CargoItem> {
        self.items.first()
    }

    pub fn load(&mut self, item: CargoItem) {
        self.total_weight += item.weight;
        self.items.push(item);
    }

    /// Remove and return the first item bound for `destination`.
    pub fn unload_for(&mut self, destination: &str) -> Option<CargoItem> {
        let index = self.items.iter().position(|c| c.destination == destination)?;
        let item = self.items.remove(index);
        self.total_weight -= item.weight;
        Some(item)
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.total_weight = 0.0;
    }
}

/// What happened when the pilot tried to interact with the nearest pad.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionOutcome {
    /// A contract was loaded; the pad's offer is consumed.
    PickedUp(CargoItem),
    /// A contract was paid out and removed from the hold.
    Delivered(CargoItem),
    /// Landed at a pad that wants none of the carried cargo.
    WrongDestination { here: String, wanted: String },
    /// At a pad with nothing to offer and nothing to deliver.
    NothingToDo,
    /// The pad offers cargo but the hold is at capacity.
    HoldFull,
    /// No pad within interaction range.
    NoLocation,
}

/// Index of the first pad within interaction range of `position`, if any.
pub fn nearby_location(position: Vec3, locations: &[CargoLocation]) -> Option<usize> {
    locations
        .iter()
        .position(|loc| position.distance(loc.position) < INTERACTION_RADIUS)
}

/// Run the pickup/delivery exchange against the nearest pad.
///
/// Pickup takes priority when the pad has cargo and the hold has room: the
/// contract gets a random weight in [1, 3) tons, a value in [100w, 200w)
/// lira, and a random destination among the other pads. Delivery pays out the
/// first carried item addressed here and restocks the pad; a pad emptied by
/// pickup stays empty until something is delivered to it.
pub fn attempt_interaction<R: Rng>(
    position: Vec3,
    locations: &mut [CargoLocation],
    hold: &mut CargoHold,
    money: &mut u32,
    capacity: usize,
    rng: &mut R,
) -> InteractionOutcome {
    let Some(index) = nearby_location(position, locations) else {
        return InteractionOutcome::NoLocation;
    };

    let offer_blocked = locations[index].has_cargo && hold.len() >= capacity;
    if locations[index].has_cargo && hold.len() < capacity {
        let weight = 1.0 + rng.gen::<f32>() * 2.0;
        let value = (weight * 100.0 * (1.0 + rng.gen::<f32>())).floor() as u32;
        let destination = random_destination(index, locations, rng);
        let item = CargoItem {
            origin: locations[index].name.clone(),
            destination,
            weight,
            value,
        };
        locations[index].has_cargo = false;
        hold.load(item.clone());
        return InteractionOutcome::PickedUp(item);
    }

    // A blocked pickup still allows delivery: dropping a contract here frees
    // hold space even while the pad's own offer waits.
    if !hold.is_empty() {
        let here = locations[index].name.clone();
        if let Some(item) = hold.unload_for(&here) {
            *money += item.value;
            locations[index].has_cargo = true;
            return InteractionOutcome::Delivered(item);
        }
        if offer_blocked {
            return InteractionOutcome::HoldFull;
        }
        if let Some(first) = hold.current_mission() {
            return InteractionOutcome::WrongDestination {
                here,
                wanted: first.destination.clone(),
            };
        }
    }

    InteractionOutcome::NothingToDo
}

fn random_destination<R: Rng>(from: usize, locations: &[CargoLocation], rng: &mut R) -> String {
    let mut pick = rng.gen_range(0..locations.len() - 1);
    if pick >= from {
        pick += 1;
    }
    locations[pick].name.clone()
}
