mod init;
mod related;
mod resolve;
