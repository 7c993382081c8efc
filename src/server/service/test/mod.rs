mod listing;
mod upsell;
