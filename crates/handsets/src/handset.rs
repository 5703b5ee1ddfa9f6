use reservoir_core::{
    Aggregate, AggregateRoot, Arg, BoundedLevel, DomainError, DomainResult, Entity, EntityId,
    Event,
};

/// Battery units drawn per minute of call time.
pub const BATTERY_PER_MINUTE: u32 = 10;

/// Handset identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HandsetId(pub EntityId);

impl HandsetId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for HandsetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Handset with a battery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handset {
    id: HandsetId,
    brand: String,
    model: String,
    battery: BoundedLevel<u32>,
    version: u64,
}

impl Handset {
    /// Create a handset with a fully charged battery.
    ///
    /// ```
    /// use reservoir_handsets::Handset;
    ///
    /// let phone = Handset::new("Apple", "iPhone 13", 4000).unwrap();
    /// assert_eq!(phone.battery_level(), 4000);
    /// assert!(Handset::new("Apple", "iPhone 13", 0).is_err());
    /// ```
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        battery_capacity: u32,
    ) -> DomainResult<Self> {
        Self::with_id(
            HandsetId::new(EntityId::new()),
            brand,
            model,
            battery_capacity,
        )
    }

    pub fn with_id(
        id: HandsetId,
        brand: impl Into<String>,
        model: impl Into<String>,
        battery_capacity: u32,
    ) -> DomainResult<Self> {
        let battery = BoundedLevel::full(battery_capacity).ok_or_else(|| {
            DomainError::value("battery capacity must be a positive integer")
        })?;
        Ok(Self {
            id,
            brand: brand.into(),
            model: model.into(),
            battery,
            version: 0,
        })
    }

    /// Create a handset from loosely-typed arguments.
    pub fn from_args(
        brand: impl Into<Arg>,
        model: impl Into<Arg>,
        battery_capacity: impl Into<Arg>,
    ) -> DomainResult<Self> {
        let brand = brand.into().into_text("handset brand must be text")?;
        let model = model.into().into_text("handset model must be text")?;
        let battery_capacity = battery_capacity
            .into()
            .positive_int("battery capacity must be a positive integer")?;
        Self::new(brand, model, battery_capacity)
    }

    pub fn id_typed(&self) -> HandsetId {
        self.id
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn battery_capacity(&self) -> u32 {
        self.battery.capacity()
    }

    pub fn battery_level(&self) -> u32 {
        self.battery.level()
    }

    /// Whole minutes of call time left on the current charge.
    pub fn talk_time_remaining(&self) -> u32 {
        self.battery.level() / BATTERY_PER_MINUTE
    }

    /// Charge the battery. Excess charge is dropped silently.
    ///
    /// ```
    /// use reservoir_handsets::Handset;
    ///
    /// let mut phone = Handset::new("Apple", "iPhone 13", 4000).unwrap();
    /// phone.charge(500).unwrap();
    /// assert_eq!(phone.battery_level(), 4000);
    /// ```
    pub fn charge(&mut self, amount: u32) -> DomainResult<()> {
        self.execute(&HandsetCommand::Charge(Charge { amount }))?;
        Ok(())
    }

    /// Make a call lasting `duration` minutes.
    ///
    /// ```
    /// use reservoir_handsets::Handset;
    ///
    /// let mut phone = Handset::new("Apple", "iPhone 13", 4000).unwrap();
    /// phone.make_call(10).unwrap();
    /// assert_eq!(phone.battery_level(), 3900);
    /// ```
    pub fn make_call(&mut self, duration: u32) -> DomainResult<()> {
        self.execute(&HandsetCommand::MakeCall(MakeCall { duration }))?;
        Ok(())
    }
}

impl Entity for Handset {
    type Id = HandsetId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl AggregateRoot for Handset {
    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: Charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charge {
    pub amount: u32,
}

/// Command: MakeCall (duration in minutes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeCall {
    pub duration: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandsetCommand {
    Charge(Charge),
    MakeCall(MakeCall),
}

/// Event: Charged.
///
/// `gained` is what actually went into the battery after clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Charged {
    pub requested: u32,
    pub gained: u32,
}

/// Event: CallMade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallMade {
    pub duration: u32,
    pub battery_used: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandsetEvent {
    Charged(Charged),
    CallMade(CallMade),
}

impl Event for HandsetEvent {
    fn event_type(&self) -> &'static str {
        match self {
            HandsetEvent::Charged(_) => "handsets.handset.charged",
            HandsetEvent::CallMade(_) => "handsets.handset.call_made",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

impl Aggregate for Handset {
    type Command = HandsetCommand;
    type Event = HandsetEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            HandsetEvent::Charged(e) => {
                self.battery.fill_saturating(e.gained);
            }
            HandsetEvent::CallMade(e) => {
                self.battery.drain_saturating(e.battery_used);
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            HandsetCommand::Charge(cmd) => self.handle_charge(cmd),
            HandsetCommand::MakeCall(cmd) => self.handle_make_call(cmd),
        }
    }
}

impl Handset {
    fn handle_charge(&self, cmd: &Charge) -> Result<Vec<HandsetEvent>, DomainError> {
        if cmd.amount == 0 {
            return Err(DomainError::value("charge amount must be a positive integer"));
        }
        Ok(vec![HandsetEvent::Charged(Charged {
            requested: cmd.amount,
            gained: self.battery.saturating_gain(cmd.amount),
        })])
    }

    fn handle_make_call(&self, cmd: &MakeCall) -> Result<Vec<HandsetEvent>, DomainError> {
        if cmd.duration == 0 {
            return Err(DomainError::value("call duration must be a positive integer"));
        }
        let battery_used = cmd
            .duration
            .checked_mul(BATTERY_PER_MINUTE)
            .filter(|needed| self.battery.checked_drain(*needed).is_some())
            .ok_or_else(|| DomainError::value("not enough battery for the call"))?;
        Ok(vec![HandsetEvent::CallMade(CallMade {
            duration: cmd.duration,
            battery_used,
        })])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iphone() -> Handset {
        Handset::new("Apple", "iPhone 13", 4000).unwrap()
    }

    #[test]
    fn new_handset_starts_fully_charged() {
        let phone = iphone();
        assert_eq!(phone.brand(), "Apple");
        assert_eq!(phone.model(), "iPhone 13");
        assert_eq!(phone.battery_capacity(), 4000);
        assert_eq!(phone.battery_level(), 4000);
        assert_eq!(phone.version(), 0);
    }

    #[test]
    fn with_id_keeps_the_given_id() {
        let id = HandsetId::new(EntityId::new());
        let phone = Handset::with_id(id, "Nokia", "3310", 900).unwrap();
        assert_eq!(phone.id_typed(), id);
        assert_eq!(*phone.id(), id);
    }

    #[test]
    fn new_rejects_zero_capacity() {
        let err = Handset::new("Apple", "iPhone 13", 0).unwrap_err();
        match err {
            DomainError::Value(_) => {}
            _ => panic!("Expected Value error for zero capacity"),
        }
    }

    #[test]
    fn from_args_validates_types_and_integers() {
        let err = Handset::from_args(1, "iPhone 13", 4000).unwrap_err();
        assert!(err.is_type());

        let err = Handset::from_args("Apple", 13, 4000).unwrap_err();
        assert!(err.is_type());

        for capacity in [Arg::from(4000.0), Arg::from(-1), Arg::from(0)] {
            let err = Handset::from_args("Apple", "iPhone 13", capacity).unwrap_err();
            assert!(err.is_value());
        }

        let phone = Handset::from_args("Apple", "iPhone 13", 4000).unwrap();
        assert_eq!(phone.battery_level(), 4000);
    }

    #[test]
    fn charging_a_full_battery_is_clamped_not_rejected() {
        let mut phone = iphone();
        phone.charge(500).unwrap();
        assert_eq!(phone.battery_level(), 4000);
        assert_eq!(phone.version(), 1);
    }

    #[test]
    fn charge_beyond_headroom_clamps_to_capacity() {
        let mut phone = iphone();
        phone.make_call(30).unwrap();
        assert_eq!(phone.battery_level(), 3700);

        let events = phone
            .handle(&HandsetCommand::Charge(Charge { amount: 1000 }))
            .unwrap();
        assert_eq!(
            events,
            vec![HandsetEvent::Charged(Charged {
                requested: 1000,
                gained: 300,
            })]
        );

        phone.charge(1000).unwrap();
        assert_eq!(phone.battery_level(), 4000);
    }

    #[test]
    fn charge_handles_huge_amounts() {
        let mut phone = iphone();
        phone.make_call(1).unwrap();
        phone.charge(u32::MAX).unwrap();
        assert_eq!(phone.battery_level(), 4000);
    }

    #[test]
    fn charge_rejects_zero() {
        let mut phone = iphone();
        assert!(phone.charge(0).unwrap_err().is_value());
        assert_eq!(phone.version(), 0);
    }

    #[test]
    fn make_call_drains_ten_units_per_minute() {
        let mut phone = iphone();
        phone.make_call(10).unwrap();
        assert_eq!(phone.battery_level(), 3900);
        assert_eq!(phone.talk_time_remaining(), 390);
    }

    #[test]
    fn make_call_rejects_zero_duration() {
        let mut phone = iphone();
        assert!(phone.make_call(0).unwrap_err().is_value());
        assert_eq!(phone.battery_level(), 4000);
    }

    #[test]
    fn make_call_without_enough_battery_is_rejected() {
        let mut phone = iphone();
        phone.make_call(400).unwrap();
        assert_eq!(phone.battery_level(), 0);

        let err = phone.make_call(1).unwrap_err();
        match err {
            DomainError::Value(msg) if msg.contains("not enough battery") => {}
            _ => panic!("Expected Value error for insufficient battery"),
        }
        assert_eq!(phone.battery_level(), 0);
        assert_eq!(phone.version(), 1);
    }

    #[test]
    fn make_call_overflowing_duration_is_rejected() {
        let mut phone = iphone();
        assert!(phone.make_call(u32::MAX).unwrap_err().is_value());
        assert_eq!(phone.battery_level(), 4000);
    }

    #[test]
    fn event_types_are_stable() {
        let charged = HandsetEvent::Charged(Charged {
            requested: 1,
            gained: 0,
        });
        let call = HandsetEvent::CallMade(CallMade {
            duration: 1,
            battery_used: 10,
        });
        assert_eq!(charged.event_type(), "handsets.handset.charged");
        assert_eq!(call.event_type(), "handsets.handset.call_made");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: battery stays in [0, capacity] and a rejected call changes nothing.
            #[test]
            fn battery_level_stays_within_capacity(
                capacity in 1u32..10_000,
                ops in proptest::collection::vec((any::<bool>(), 0u32..2_000), 0..50)
            ) {
                let mut phone = Handset::new("Apple", "iPhone 13", capacity).unwrap();
                for (is_charge, n) in ops {
                    let before = phone.clone();
                    let result = if is_charge { phone.charge(n) } else { phone.make_call(n) };
                    match result {
                        Ok(()) => prop_assert_eq!(phone.version(), before.version() + 1),
                        Err(_) => prop_assert_eq!(&phone, &before),
                    }
                    prop_assert!(phone.battery_level() <= phone.battery_capacity());
                }
            }

            /// Property: charging by more than the headroom lands exactly on capacity.
            #[test]
            fn oversized_charge_saturates(
                capacity in 10u32..10_000,
                minutes in 1u32..1_000,
                extra in 1u32..10_000
            ) {
                let mut phone = Handset::new("Apple", "iPhone 13", capacity).unwrap();
                let _ = phone.make_call(minutes);
                let headroom = phone.battery_capacity() - phone.battery_level();
                phone.charge(headroom + extra).unwrap();
                prop_assert_eq!(phone.battery_level(), capacity);
            }
        }
    }
}
