use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(ToSchema)]
pub struct NoteDoc { pub id: String, pub title: String, pub content: String }

#[derive(ToSchema)]
pub struct NoteCreateDoc {
    pub title: String,
    pub content: String,
}

#[derive(ToSchema)]
pub struct NoteUpdateDoc {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(ToSchema)]
#[schema(rename_all = "lowercase")]
pub enum RoleDoc { User, Admin }

#[derive(ToSchema)]
pub struct EmployeeDoc {
    pub id: String,
    pub name: String,
    pub designation: String,
    pub role: RoleDoc,
    pub address: String,
}

#[derive(ToSchema)]
pub struct EmployeeCreateDoc {
    #[schema(min_length = 2, max_length = 100)]
    pub name: String,
    #[schema(min_length = 2, max_length = 100)]
    pub designation: String,
    pub role: RoleDoc,
    #[schema(min_length = 2, max_length = 100)]
    pub address: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::notes::create,
        crate::routes::notes::list,
        crate::routes::notes::get,
        crate::routes::notes::update,
        crate::routes::notes::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            NoteDoc,
            NoteCreateDoc,
            NoteUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "notes")
    )
)]
pub struct NotesApiDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::employees::create,
        crate::routes::employees::list,
        crate::routes::employees::get,
        crate::routes::employees::update,
        crate::routes::employees::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            RoleDoc,
            EmployeeDoc,
            EmployeeCreateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "employees")
    )
)]
pub struct EmployeesApiDoc;
