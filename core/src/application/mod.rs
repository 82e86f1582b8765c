pub mod http;
pub mod to_do;

pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use to_do::{
    RemoteCreateToDoUseCase, RemoteDeleteToDoUseCase, RemoteListToDosUseCase,
    RemoteUpdateToDoUseCase,
};
