use crate::quantity::distance::Kilometers;

quantity!(Liters, via: f64, suffix: "L", precision: 0);

quantity!(
    /// Fuel consumption.
    LitersPer100Km, via: f64, suffix: "L/100 km", precision: 1
);

impl LitersPer100Km {
    /// Fuel burnt over the distance.
    pub fn over(self, distance: Kilometers) -> Liters {
        Liters((distance.0 / 100.0) * self.0)
    }
}
