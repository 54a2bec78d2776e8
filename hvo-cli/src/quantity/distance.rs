quantity!(Kilometers, via: f64, suffix: "km", precision: 0);
