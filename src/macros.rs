use paste::paste;

macro_rules! build_resp_inner {
    ($name:ident ,$path:ident) => {
        #[macro_export]
        macro_rules! $name {
            () => {
                actix_web::HttpResponse::$path().finish()
            };
            ($message:expr) => {
                actix_web::HttpResponse::$path().body($message)
            };
        }
    };
}

macro_rules! build_resp {
    ($name:ident, $path:ident) => {
        paste! {
            build_resp_inner!([<$name _macro>], $path);
            #[allow(unused_imports)]
            pub use [<$name _macro>] as $name;
            #[macro_export]
            macro_rules! [<$name _html_macro>] {
                ($page:expr) => {
                    actix_web::HttpResponse::$path()
                        .insert_header(actix_web::http::header::ContentType::html())
                        .body($page)
                };
            }
            #[allow(unused_imports)]
            pub use [<$name _html_macro>] as [<$name _html>];
        }
    };
}

build_resp!(resp_200_Ok, Ok);
build_resp!(resp_400_BadRequest, BadRequest);
build_resp!(resp_404_NotFound, NotFound);
build_resp!(resp_502_BadGateway, BadGateway);
