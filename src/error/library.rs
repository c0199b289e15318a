//! Library table errors

path_error_constructors! {
    read_failed => LibraryReadFailed,
    write_failed => LibraryWriteFailed,
}
