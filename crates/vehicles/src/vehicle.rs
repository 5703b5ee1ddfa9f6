use reservoir_core::{
    Aggregate, AggregateRoot, Arg, BoundedLevel, DomainError, DomainResult, Entity, EntityId,
    Event,
};

/// Fuel burned per unit of distance (1 unit of fuel per 10 distance units).
pub const FUEL_PER_DISTANCE: f64 = 0.1;

/// Vehicle identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VehicleId(pub EntityId);

impl VehicleId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for VehicleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Vehicle with a fuel tank.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: VehicleId,
    brand: String,
    model: String,
    tank: BoundedLevel<f64>,
    version: u64,
}

impl Vehicle {
    /// Create a vehicle with an empty tank.
    ///
    /// ```
    /// use reservoir_vehicles::Vehicle;
    ///
    /// let car = Vehicle::new("Toyota", "Corolla", 50.0).unwrap();
    /// assert_eq!(car.fuel_level(), 0.0);
    /// assert!(Vehicle::new("Toyota", "Corolla", 0.0).is_err());
    /// ```
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        fuel_capacity: f64,
    ) -> DomainResult<Self> {
        Self::with_id(VehicleId::new(EntityId::new()), brand, model, fuel_capacity)
    }

    pub fn with_id(
        id: VehicleId,
        brand: impl Into<String>,
        model: impl Into<String>,
        fuel_capacity: f64,
    ) -> DomainResult<Self> {
        let tank = BoundedLevel::empty(fuel_capacity)
            .ok_or_else(|| DomainError::value("fuel capacity must be a positive number"))?;
        Ok(Self {
            id,
            brand: brand.into(),
            model: model.into(),
            tank,
            version: 0,
        })
    }

    /// Create a vehicle from loosely-typed arguments.
    ///
    /// Brand is checked first, then model, then capacity.
    pub fn from_args(
        brand: impl Into<Arg>,
        model: impl Into<Arg>,
        fuel_capacity: impl Into<Arg>,
    ) -> DomainResult<Self> {
        let brand = brand.into().into_text("vehicle brand must be text")?;
        let model = model.into().into_text("vehicle model must be text")?;
        let fuel_capacity = fuel_capacity
            .into()
            .positive_real("fuel capacity must be a positive number")?;
        Self::new(brand, model, fuel_capacity)
    }

    pub fn id_typed(&self) -> VehicleId {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn fuel_capacity(&self) -> f64 {
        self.tank.capacity()
    }

    pub fn fuel_level(&self) -> f64 {
        self.tank.level()
    }

    /// Distance the current fuel level covers.
    pub fn range(&self) -> f64 {
        self.tank.level() / FUEL_PER_DISTANCE
    }

    /// Add fuel. Overfilling the tank is an error, not a clamp.
    ///
    /// ```
    /// use reservoir_vehicles::Vehicle;
    ///
    /// let mut car = Vehicle::new("Toyota", "Corolla", 50.0).unwrap();
    /// car.refuel(20.0).unwrap();
    /// assert!(car.refuel(31.0).is_err());
    /// assert_eq!(car.fuel_level(), 20.0);
    /// ```
    pub fn refuel(&mut self, amount: f64) -> DomainResult<()> {
        self.execute(&VehicleCommand::Refuel(Refuel { amount }))?;
        Ok(())
    }

    /// Drive `distance`, burning `distance * FUEL_PER_DISTANCE` fuel.
    ///
    /// ```
    /// use reservoir_vehicles::Vehicle;
    ///
    /// let mut car = Vehicle::new("Toyota", "Corolla", 50.0).unwrap();
    /// car.refuel(10.0).unwrap();
    /// car.drive(50.0).unwrap();
    /// assert_eq!(car.fuel_level(), 5.0);
    /// ```
    pub fn drive(&mut self, distance: f64) -> DomainResult<()> {
        self.execute(&VehicleCommand::Drive(Drive { distance }))?;
        Ok(())
    }
}

impl Entity for Vehicle {
    type Id = VehicleId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Vehicle {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: Refuel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refuel {
    pub amount: f64,
}

/// Command: Drive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drive {
    pub distance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VehicleCommand {
    Refuel(Refuel),
    Drive(Drive),
}

/// Event: Refueled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Refueled {
    pub amount: f64,
}

/// Event: Driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Driven {
    pub distance: f64,
    pub fuel_used: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VehicleEvent {
    Refueled(Refueled),
    Driven(Driven),
}

impl Event for VehicleEvent {
    fn event_type(&self) -> &'static str {
        match self {
            VehicleEvent::Refueled(_) => "vehicles.vehicle.refueled",
            VehicleEvent::Driven(_) => "vehicles.vehicle.driven",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Vehicle {
    type Command = VehicleCommand;
    type Event = VehicleEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            VehicleEvent::Refueled(e) => {
                self.tank.fill_saturating(e.amount);
            }
            VehicleEvent::Driven(e) => {
                self.tank.drain_saturating(e.fuel_used);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            VehicleCommand::Refuel(cmd) => self.handle_refuel(cmd),
            VehicleCommand::Drive(cmd) => self.handle_drive(cmd),
        }
    }
}

impl Vehicle {
    fn handle_refuel(&self, cmd: &Refuel) -> Result<Vec<VehicleEvent>, DomainError> {
        if !(cmd.amount.is_finite() && cmd.amount > 0.0) {
            return Err(DomainError::value("fuel amount must be a positive number"));
        }
        if self.tank.checked_fill(cmd.amount).is_none() {
            return Err(DomainError::value("cannot refuel beyond tank capacity"));
        }
        Ok(vec![VehicleEvent::Refueled(Refueled { amount: cmd.amount })])
    }

    fn handle_drive(&self, cmd: &Drive) -> Result<Vec<VehicleEvent>, DomainError> {
        if !(cmd.distance.is_finite() && cmd.distance > 0.0) {
            return Err(DomainError::value("distance must be a positive number"));
        }
        let fuel_used = cmd.distance * FUEL_PER_DISTANCE;
        if self.tank.checked_drain(fuel_used).is_none() {
            return Err(DomainError::value("not enough fuel for the trip"));
        }
        Ok(vec![VehicleEvent::Driven(Driven {
            distance: cmd.distance,
            fuel_used,
        })])
    }
}
