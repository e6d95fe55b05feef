mod fixtures;
mod loading;
mod parsing;
mod queries;
