mod automated_message;
mod listing_image;
mod listing_lock;
mod upsell;
