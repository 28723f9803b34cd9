mod acceptance;
mod util;
