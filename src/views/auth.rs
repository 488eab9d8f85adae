// ============================================================================
// AUTH VIEWS - sign-in and registration forms
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::app::App;
use crate::dom::{input_value, on_click, ElementBuilder};
use crate::models::{Credentials, UserType};
use crate::views::layout::link;

fn field(id: &str, label: &str, input_type: &str) -> Result<Element, JsValue> {
    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();
    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(label_el)?
        .child(input)?
        .build())
}

fn submit_button(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("button")?
        .class("btn-primary")
        .attr("type", "button")?
        .text(text)
        .build())
}

pub fn render_login_form(app: &Rc<App>, redirect: Option<&str>) -> Result<Element, JsValue> {
    let button = submit_button("Sign in")?;
    {
        let app = app.clone();
        let redirect = redirect.map(str::to_string);
        on_click(&button, move |e: MouseEvent| {
            e.prevent_default();
            let credentials = Credentials {
                username: input_value("user_name"),
                password: input_value("user_pwd"),
            };
            app.login(credentials, redirect.clone());
        })?;
    }

    Ok(ElementBuilder::new("form")?
        .class("auth-form")
        .child(field("user_name", "Username", "text")?)?
        .child(field("user_pwd", "Password", "password")?)?
        .child(button)?
        .child(link(app, "Create a customer account", "/register/customer")?)?
        .build())
}

pub fn render_register_form(app: &Rc<App>, user_type: UserType) -> Result<Element, JsValue> {
    let mut form = ElementBuilder::new("form")?
        .class("auth-form")
        .data("user_type", user_type.as_str())?
        .child(field("user_name", "Username", "text")?)?
        .child(field("user_pwd", "Password", "password")?)?;
    if user_type == UserType::Worker {
        form = form.child(field("worker_type", "Worker type", "number")?)?;
    }

    let button = submit_button("Register")?;
    {
        let app = app.clone();
        on_click(&button, move |e: MouseEvent| {
            e.prevent_default();
            let worker_type = match user_type {
                UserType::Worker => input_value("worker_type"),
                _ => String::new(),
            };
            app.submit_registration(
                user_type,
                input_value("user_name"),
                input_value("user_pwd"),
                &worker_type,
            );
        })?;
    }
    form = form.child(button)?;

    if user_type == UserType::Customer {
        form = form.child(link(app, "Already registered? Sign in", "/login")?)?;
    }
    Ok(form.build())
}
