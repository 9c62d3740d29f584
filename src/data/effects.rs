//! Reference effect table.

/// Effects and their price multipliers, in bit order.
pub const EFFECTS: &[(&str, f64)] = &[
    ("Disorienting", 0.00),
    ("Laxative", 0.00),
    ("Paranoia", 0.00),
    ("Schizophrenia", 0.00),
    ("Seizure-Inducing", 0.00),
    ("Smelly", 0.00),
    ("Toxic", 0.00),
    ("Explosive", 0.00),
    ("Calming", 0.10),
    ("Munchies", 0.12),
    ("Refreshing", 0.14),
    ("Focused", 0.16),
    ("Euphoric", 0.18),
    ("Gingeritis", 0.20),
    ("Energizing", 0.22),
    ("Sneaky", 0.24),
    ("Sedating", 0.26),
    ("Calorie-Dense", 0.28),
    ("Balding", 0.30),
    ("Athletic", 0.32),
    ("Slippery", 0.34),
    ("Foggy", 0.36),
    ("Spicy", 0.38),
    ("Bright-Eyed", 0.40),
    ("Jennerising", 0.42),
    ("Thought-Provoking", 0.44),
    ("Tropic Thunder", 0.46),
    ("Glowing", 0.48),
    ("Electrifying", 0.50),
    ("Long Faced", 0.52),
    ("Anti-Gravity", 0.54),
    ("Cyclopean", 0.56),
    ("Zombifying", 0.58),
    ("Shrinking", 0.60),
];
