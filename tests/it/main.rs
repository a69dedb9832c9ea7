mod byte_stream_split;
mod hybrid_rle;
mod levels;
