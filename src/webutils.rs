use std::borrow::Cow;

use anyhow::{Error, Result};
use log::warn;
use rouille::{Response, ResponseBody};
use shtml::{assemble, cls, text, to_html_string,
            elements::{a, div, h1, p}, href, BuildError, Node, PageMetadata};

use crate::streaming::spawn_render;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    Ok200,
    NotFound404,
    MethodNotAllowed405,
    InternalServerError500,
}

impl HttpStatus {
    pub fn code(self) -> u16 {
        match self {
            HttpStatus::Ok200 => 200,
            HttpStatus::NotFound404 => 404,
            HttpStatus::MethodNotAllowed405 => 405,
            HttpStatus::InternalServerError500 => 500,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            HttpStatus::Ok200 => "OK",
            HttpStatus::NotFound404 => "Not Found",
            HttpStatus::MethodNotAllowed405 => "Method Not Allowed",
            HttpStatus::InternalServerError500 => "Internal Server Error",
        }
    }

    pub fn desc(self) -> &'static str {
        match self {
            HttpStatus::Ok200 => "",
            HttpStatus::NotFound404 => "The requested page does not exist.",
            HttpStatus::MethodNotAllowed405 => "This method is not supported here.",
            HttpStatus::InternalServerError500 =>
                "Something went wrong while producing this page.",
        }
    }
}

fn html_headers() -> Vec<(Cow<'static, str>, Cow<'static, str>)> {
    vec![(Cow::from("Content-type"), Cow::from("text/html; charset=utf-8"))]
}

/// Render the document `tree` in a separate thread, streamed as the
/// response body.
pub fn streamed_htmlresponse(
    tree: Node,
    status: HttpStatus,
    channel_bound: usize,
) -> Result<Response> {
    // Failures after the status line went out can only be logged,
    // which the render thread does itself.
    let (reader, _handle) = spawn_render(tree, true, channel_bound)?;
    Ok(Response {
        status_code: status.code(),
        headers: html_headers(),
        data: ResponseBody::from_reader(reader),
        upgrade: None,
    })
}

/// Render the document `tree` in the request thread.
pub fn htmlresponse(tree: &Node, status: HttpStatus) -> Response {
    Response {
        status_code: status.code(),
        headers: html_headers(),
        data: ResponseBody::from_string(to_html_string(tree, true)),
        upgrade: None,
    }
}

pub fn errorpage_tree(status: HttpStatus, page: &PageMetadata) -> Result<Node, BuildError> {
    let page = PageMetadata {
        title: format!("{} | {}", status.title(), page.title).into(),
        ..page.clone()
    };
    assemble(
        div([
            cls("flex flex-col items-center gap-4 p-16"),
            h1([cls("text-4xl font-bold"), text(status.title())])?.into(),
            p([text(status.desc())])?.into(),
            a([cls("link-accent"), href("/"), text("Back to the home page")])?.into(),
        ])?,
        &page)
}

/// Error pages are small, they are rendered in the request thread.
pub fn errorpage_from_status(status: HttpStatus, page: &PageMetadata) -> Response {
    match errorpage_tree(status, page) {
        Ok(tree) => htmlresponse(&tree, status),
        Err(e) => {
            warn!("building error page: {e}");
            Response {
                status_code: status.code(),
                headers: html_headers(),
                data: ResponseBody::from_string(
                    format!("<!DOCTYPE html>\n<h1>{}</h1>\n", status.title())),
                upgrade: None,
            }
        }
    }
}

pub fn errorpage_from_error(err: Error, page: &PageMetadata) -> Response {
    let status = HttpStatus::InternalServerError500;
    warn!("error in page (returning {status:?}): {err:#}");
    errorpage_from_status(status, page)
}
