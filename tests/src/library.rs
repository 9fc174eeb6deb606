mod isolation;
mod properties;
mod round_trip;
