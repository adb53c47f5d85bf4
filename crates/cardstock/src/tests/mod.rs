mod round_trip;
mod scenarios;
