mod dense;
mod vector;
