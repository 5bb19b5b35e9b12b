pub mod emitter;
pub mod sam_record;
pub mod streamer;
pub mod tag_set;
