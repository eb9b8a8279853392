//! Preset choices offered to users. The request builder accepts any value;
//! these lists only seed pickers in front-ends.

pub const CUISINES: [&str; 9] = [
    "Any",
    "Italian",
    "Asian",
    "Mexican",
    "Mediterranean",
    "Indian",
    "American",
    "French",
    "Thai",
];

pub const MEAL_TYPES: [&str; 5] = ["Any", "Breakfast", "Lunch", "Dinner", "Beverage"];
