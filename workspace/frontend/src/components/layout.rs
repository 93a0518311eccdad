use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
                <div class="flex-1 justify-center px-4">
                    <h1 class="text-3xl font-bold text-center text-blue-600" id="page-title">{ &props.title }</h1>
                </div>
            </div>
            <main class="flex-1 p-4 space-y-6">
                { for props.children.iter() }
            </main>
        </div>
    }
}
